//! Structured makemkvcon output
//!
//! Fields left as `None` are omitted when serialized, so the JSON form only
//! carries what makemkvcon actually reported.

use crate::apdefs::{DiskFsFlags, DriveState, ItemAttributeId, StreamFlags};
use crate::defaults::{MAX_STREAMS, MAX_TITLES};
use crate::lang;
use crate::robot::codes;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of applying one attribute line to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The value was stored
    Set,
    /// The item does not carry this attribute
    Ignored,
    /// The attribute belongs to the item but the value did not parse
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscType {
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(rename = "BD")]
    Bd,
    #[serde(rename = "HDDVD")]
    Hddvd,
    #[serde(rename = "MKV")]
    Mkv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Video,
    Audio,
    Subtitles,
}

/// An optical drive reported by a `DRV` line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DriveState>,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub flags: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_path: Option<String>,
}

impl Drive {
    /// Disc structures found on the inserted medium
    pub fn fs_flags(&self) -> DiskFsFlags {
        DiskFsFlags::from_bits_truncate(self.flags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub disc_type: Option<DiscType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_langcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Disc {
    /// Store a `CINFO` attribute
    pub fn apply(&mut self, attribute: ItemAttributeId, code: u32, value: &str) -> Applied {
        use ItemAttributeId as A;
        match attribute {
            A::Type => set_coded(&mut self.disc_type, codes::disc_type(code)),
            A::Name => set_text(&mut self.name, value),
            A::MetadataLanguageCode => set_langcode(&mut self.metadata_langcode, value),
            A::MetadataLanguageName => set_text(&mut self.metadata_language, value),
            A::TreeInfo => set_text(&mut self.information, value),
            A::VolumeName => set_text(&mut self.volume_name, value),
            A::Comment => set_text(&mut self.comment, value),
            _ => Applied::Ignored,
        }
    }
}

/// A title (playlist or program chain) and its streams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_count: Option<u32>,
    /// `h:mm:ss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// e.g. "5.9 GB"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_human: Option<String>,
    /// Bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_angle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_map: Option<String>,
    /// e.g. "title_t00.mkv"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_langcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub streams: Vec<Stream>,
}

impl Title {
    /// Store a `TINFO` attribute
    pub fn apply(&mut self, attribute: ItemAttributeId, _code: u32, value: &str) -> Applied {
        use ItemAttributeId as A;
        match attribute {
            A::Name => set_text(&mut self.name, value),
            A::ChapterCount => set_int(&mut self.chapter_count, value),
            A::Duration => set_text(&mut self.length, value),
            A::DiskSize => set_text(&mut self.size_human, value),
            A::DiskSizeBytes => set_int(&mut self.size, value),
            A::AngleInfo => set_int(&mut self.video_angle, value),
            A::SourceFileName => set_text(&mut self.source_filename, value),
            A::OriginalTitleId => set_int(&mut self.original_title_id, value),
            A::SegmentsCount => set_int(&mut self.segments_count, value),
            A::SegmentsMap => set_text(&mut self.segments_map, value),
            A::OutputFileName => set_text(&mut self.file_output, value),
            A::MetadataLanguageCode => set_langcode(&mut self.metadata_langcode, value),
            A::MetadataLanguageName => set_text(&mut self.metadata_language, value),
            A::TreeInfo => set_text(&mut self.information, value),
            A::Comment => set_text(&mut self.comment, value),
            _ => Applied::Ignored,
        }
    }

    /// Stream `index`, creating empty streams up to it.
    /// `None` when the index is at or above [`MAX_STREAMS`].
    pub fn stream_mut(&mut self, index: usize) -> Option<&mut Stream> {
        if index >= MAX_STREAMS {
            return None;
        }
        if index >= self.streams.len() {
            self.streams.resize_with(index + 1, Stream::default);
        }
        self.streams.get_mut(index)
    }
}

/// A video, audio or subtitle track of a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub stream_type: Option<StreamType>,
    /// e.g. "Surround 5.1"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downmix: Option<String>,
    /// ISO 639-1 where one exists, e.g. "en"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub langcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// e.g. "V_MPEG4/ISO/AVC", "A_AC3", "S_VOBSUB"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_long: Option<String>,
    /// e.g. "384 Kb/s"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samplerate: Option<u32>,
    /// e.g. "1920x1080"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// e.g. "16:9"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_angle: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_langcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_language: Option<String>,
    /// e.g. "DD Surround 5.1 English"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
}

impl Stream {
    /// Store a `SINFO` attribute
    pub fn apply(&mut self, attribute: ItemAttributeId, code: u32, value: &str) -> Applied {
        use ItemAttributeId as A;
        match attribute {
            A::Type => set_coded(&mut self.stream_type, codes::stream_type(code)),
            // for tracks the name column carries the channel description
            A::Name => set_text(&mut self.downmix, value),
            A::LangCode => set_langcode(&mut self.langcode, value),
            A::LangName => set_text(&mut self.language, value),
            A::CodecId => set_text(&mut self.codec_id, value),
            A::CodecShort => set_text(&mut self.codec_short, value),
            A::CodecLong => set_text(&mut self.codec_long, value),
            A::Bitrate => set_text(&mut self.bitrate, value),
            A::AudioChannelsCount => set_int(&mut self.channel_count, value),
            A::AngleInfo => set_int(&mut self.video_angle, value),
            A::AudioSampleRate => set_int(&mut self.samplerate, value),
            A::VideoSize => set_text(&mut self.dimensions, value),
            A::VideoAspectRatio => set_text(&mut self.aspect_ratio, value),
            A::VideoFrameRate => match parse_framerate(value) {
                Some(rate) => {
                    self.framerate = Some(rate);
                    Applied::Set
                }
                None => Applied::Invalid,
            },
            A::StreamFlags => set_int(&mut self.flags, value),
            A::MetadataLanguageCode => set_langcode(&mut self.metadata_langcode, value),
            A::MetadataLanguageName => set_text(&mut self.metadata_language, value),
            A::TreeInfo => set_text(&mut self.information, value),
            A::AudioChannelLayoutName => set_text(&mut self.channel_layout, value),
            _ => Applied::Ignored,
        }
    }

    pub fn stream_flags(&self) -> StreamFlags {
        StreamFlags::from_bits_truncate(self.flags.unwrap_or(0))
    }
}

/// Everything collected from one makemkvcon run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MakeMkvOutput {
    #[serde(default)]
    pub drives: Vec<Drive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc: Option<Disc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_count: Option<u32>,
    #[serde(default)]
    pub titles: Vec<Title>,
}

impl MakeMkvOutput {
    /// Title `index`, creating empty titles up to it.
    /// `None` when the index is at or above [`MAX_TITLES`].
    pub fn title_mut(&mut self, index: usize) -> Option<&mut Title> {
        if index >= MAX_TITLES {
            return None;
        }
        if index >= self.titles.len() {
            self.titles.resize_with(index + 1, Title::default);
        }
        self.titles.get_mut(index)
    }

    /// JSON with keys sorted at every level
    pub fn to_sorted_json(&self) -> serde_json::Result<String> {
        // serde_json's Map is ordered by key unless preserve_order is enabled
        let value = serde_json::to_value(self)?;
        serde_json::to_string_pretty(&value)
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn set_text(slot: &mut Option<String>, value: &str) -> Applied {
    *slot = Some(value.trim().to_string());
    Applied::Set
}

fn set_langcode(slot: &mut Option<String>, value: &str) -> Applied {
    let code = value.trim();
    if code.is_empty() {
        return Applied::Invalid;
    }
    *slot = Some(lang::to_iso639_1(code).unwrap_or(code).to_string());
    Applied::Set
}

fn set_int<T: FromStr>(slot: &mut Option<T>, value: &str) -> Applied {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Applied::Invalid;
    }
    match digits.parse() {
        Ok(number) => {
            *slot = Some(number);
            Applied::Set
        }
        Err(_) => Applied::Invalid,
    }
}

fn set_coded<T>(slot: &mut Option<T>, decoded: Option<T>) -> Applied {
    match decoded {
        Some(value) => {
            *slot = Some(value);
            Applied::Set
        }
        None => Applied::Invalid,
    }
}

/// Leading number of a frame rate such as "23.976 (24000/1001)"
fn parse_framerate(value: &str) -> Option<f64> {
    let number = value.split_whitespace().next()?;
    number.parse::<f64>().ok().filter(|rate| rate.is_finite() && *rate > 0.0)
}
