//! Builds [`MakeMkvOutput`] from a stream of robot lines

use super::codes::{self, Severity};
use super::message::{AttributeLine, DriveLine, RobotLine};
use crate::exceptions::{MakeMkvError, Result};
use crate::types::{Applied, Drive, MakeMkvOutput};
use log::{debug, error, log, trace};

/// Log target for messages relayed from makemkvcon
pub const MAKEMKVCON_TARGET: &str = "makemkv::makemkvcon";

/// Receives `PRGV` updates together with the current `PRGC` title
pub trait ProgressHandler {
    fn progress(&mut self, title: &str, current: u32, max: u32);
}

impl<F> ProgressHandler for F
where
    F: FnMut(&str, u32, u32),
{
    fn progress(&mut self, title: &str, current: u32, max: u32) {
        self(title, current, max)
    }
}

/// Line-by-line state machine over makemkvcon's robot output
pub struct OutputParser<'a> {
    output: MakeMkvOutput,
    progress_title: String,
    handler: Option<&'a mut dyn ProgressHandler>,
}

impl std::fmt::Debug for OutputParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputParser")
            .field("output", &self.output)
            .field("progress_title", &self.progress_title)
            .finish_non_exhaustive()
    }
}

impl Default for OutputParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OutputParser<'a> {
    pub fn new() -> Self {
        OutputParser {
            output: MakeMkvOutput::default(),
            progress_title: String::new(),
            handler: None,
        }
    }

    pub fn with_progress(handler: &'a mut dyn ProgressHandler) -> Self {
        OutputParser {
            handler: Some(handler),
            ..Self::new()
        }
    }

    /// Output collected so far
    pub fn output(&self) -> &MakeMkvOutput {
        &self.output
    }

    pub fn finish(self) -> MakeMkvOutput {
        self.output
    }

    /// Consume one line.
    ///
    /// Malformed lines are logged and skipped. The only error is a message
    /// of critical severity, after which makemkvcon cannot continue.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let parsed = match RobotLine::parse(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                error!("Error while parsing '{}': {}", line.trim(), err);
                return Ok(());
            }
        };

        match parsed {
            RobotLine::Message(msg) => {
                let severity = codes::classify(msg.code, msg.flags);
                relay(severity, &msg.message, msg.code);
                if severity == Severity::Critical {
                    return Err(MakeMkvError::Critical(msg.message));
                }
            }
            RobotLine::ProgressTotal(title) => {
                let severity = codes::message_severity(title.code).unwrap_or(Severity::Debug);
                relay(severity, &title.name, title.code);
            }
            RobotLine::ProgressCurrent(title) => {
                trace!("📊 Progress title: {}", title.name);
                self.progress_title = title.name;
            }
            RobotLine::ProgressValue { current, max, .. } => {
                if let Some(handler) = self.handler.as_mut() {
                    handler.progress(&self.progress_title, current, max);
                }
            }
            RobotLine::Drive(drive) => self.add_drive(drive),
            RobotLine::TitleCount(count) => {
                debug!("🔢 Title count: {count}");
                self.output.title_count = Some(count);
            }
            RobotLine::DiscInfo(attr) => {
                let disc = self.output.disc.get_or_insert_with(Default::default);
                report(line, &attr, |a| disc.apply(a, attr.code, &attr.value));
            }
            RobotLine::TitleInfo { title, attribute } => {
                let Some(item) = self.output.title_mut(title) else {
                    error!("Title index out of range in '{}'", line.trim());
                    return Ok(());
                };
                report(line, &attribute, |a| item.apply(a, attribute.code, &attribute.value));
            }
            RobotLine::StreamInfo { title, stream, attribute } => {
                let Some(item) = self
                    .output
                    .title_mut(title)
                    .and_then(|t| t.stream_mut(stream))
                else {
                    error!("Stream index out of range in '{}'", line.trim());
                    return Ok(());
                };
                report(line, &attribute, |a| item.apply(a, attribute.code, &attribute.value));
            }
        }
        Ok(())
    }

    fn add_drive(&mut self, line: DriveLine) {
        if line.is_empty_slot() {
            trace!("Skipping empty drive slot {}", line.index);
            return;
        }
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        debug!("💿 Drive {}: {:?}", line.index, line.drive_name);
        self.output.drives.push(Drive {
            index: line.index,
            state: line.state(),
            flags: line.flags.bits(),
            drive_name: non_empty(line.drive_name),
            disc_name: non_empty(line.disc_name),
            device_path: non_empty(line.device_path),
        });
    }
}

fn relay(severity: Severity, message: &str, code: u32) {
    log!(target: MAKEMKVCON_TARGET, severity.log_level(), "{message} ({code})");
}

fn report<F>(line: &str, attr: &AttributeLine, apply: F)
where
    F: FnOnce(crate::apdefs::ItemAttributeId) -> Applied,
{
    let Some(attribute) = attr.attribute() else {
        trace!("Unknown attribute id {} in '{}'", attr.id, line.trim());
        return;
    };
    match apply(attribute) {
        Applied::Set | Applied::Ignored => {}
        Applied::Invalid => error!("Error while parsing '{}'", line.trim()),
    }
}

/// Parse a complete recorded robot log
pub fn parse_log<I, S>(lines: I) -> Result<MakeMkvOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = OutputParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apdefs::DriveState;
    use crate::types::{DiscType, StreamType};

    #[test]
    fn test_drives() {
        let output = parse_log([
            r#"DRV:0,2,999,12,"BD-RE HL-DT-ST BD-RE  WH16NS60 1.02 KLAM6E8145","FOO_BAR","/dev/sr0""#,
            r#"DRV:1,256,999,0,"","","""#,
            r#"DRV:2,0,999,0,"DVD+R-DL ASUS SDRW-08D2S-U A901","","/dev/sr1""#,
        ])
        .unwrap();

        assert_eq!(output.drives.len(), 2);
        assert_eq!(output.drives[0].disc_name.as_deref(), Some("FOO_BAR"));
        assert_eq!(output.drives[0].device_path.as_deref(), Some("/dev/sr0"));
        assert_eq!(output.drives[0].state, Some(DriveState::Inserted));
        assert_eq!(output.drives[1].index, 2);
        assert_eq!(output.drives[1].disc_name, None);
    }

    #[test]
    fn test_out_of_range_indices_skipped() {
        let output = parse_log([
            r#"TINFO:4294967295,2,0,"x""#,
            r#"SINFO:0,4294967295,2,0,"y""#,
            r#"TINFO:1,2,0,"Title 1""#,
        ])
        .unwrap();
        assert_eq!(output.titles.len(), 2);
        assert_eq!(output.titles[1].name.as_deref(), Some("Title 1"));
        assert!(output.titles[0].streams.is_empty());
    }

    #[test]
    fn test_title_count() {
        let output = parse_log(["TCOUNT:42"]).unwrap();
        assert_eq!(output.title_count, Some(42));
    }

    #[test]
    fn test_disc_info() {
        let output = parse_log([
            r#"CINFO:1,6209,"Blu-ray disc""#,
            r#"CINFO:2,0,"Foo Bar""#,
            r#"CINFO:28,0,"eng""#,
            r#"CINFO:29,0,"English""#,
            r#"CINFO:30,0,"Foo Bar""#,
            r#"CINFO:31,6119,"<b>Source information</b><br>""#,
            r#"CINFO:32,0,"FOO_BAR""#,
            r#"CINFO:33,0,"0""#,
        ])
        .unwrap();

        let disc = output.disc.unwrap();
        assert_eq!(disc.disc_type, Some(DiscType::Bd));
        assert_eq!(disc.name.as_deref(), Some("Foo Bar"));
        assert_eq!(disc.metadata_langcode.as_deref(), Some("en"));
        assert_eq!(disc.metadata_language.as_deref(), Some("English"));
        assert_eq!(disc.information.as_deref(), Some("Foo Bar"));
        assert_eq!(disc.volume_name.as_deref(), Some("FOO_BAR"));
        assert_eq!(disc.comment, None);
    }

    #[test]
    fn test_title_info() {
        let output = parse_log([
            r#"TINFO:0,2,0,"Foo Bar""#,
            r#"TINFO:0,8,0,"42""#,
            r#"TINFO:0,9,0,"1:23:45""#,
            r#"TINFO:0,10,0,"29.3 GB""#,
            r#"TINFO:0,11,0,"31457280000""#,
            r#"TINFO:0,16,0,"00800.mpls""#,
            r#"TINFO:0,24,0,"01""#,
            r#"TINFO:0,25,0,"1""#,
            r#"TINFO:0,26,0,"123""#,
            r#"TINFO:0,27,0,"Foo_Bar_t00.mkv""#,
            r#"TINFO:0,49,0,"B1""#,
        ])
        .unwrap();

        let title = &output.titles[0];
        assert_eq!(title.name.as_deref(), Some("Foo Bar"));
        assert_eq!(title.chapter_count, Some(42));
        assert_eq!(title.length.as_deref(), Some("1:23:45"));
        assert_eq!(title.size_human.as_deref(), Some("29.3 GB"));
        assert_eq!(title.size, Some(31_457_280_000));
        assert_eq!(title.source_filename.as_deref(), Some("00800.mpls"));
        assert_eq!(title.original_title_id, Some(1));
        assert_eq!(title.segments_count, Some(1));
        assert_eq!(title.segments_map.as_deref(), Some("123"));
        assert_eq!(title.file_output.as_deref(), Some("Foo_Bar_t00.mkv"));
        assert_eq!(title.comment.as_deref(), Some("B1"));
    }

    #[test]
    fn test_stream_info() {
        let output = parse_log([
            r#"SINFO:0,0,1,6201,"Video""#,
            r#"SINFO:0,0,5,0,"V_MPEG4/ISO/AVC""#,
            r#"SINFO:0,0,19,0,"1920x1080""#,
            r#"SINFO:0,0,20,0,"16:9""#,
            r#"SINFO:0,0,21,0,"23.976 (24000/1001)""#,
            r#"SINFO:0,1,1,6202,"Audio""#,
            r#"SINFO:0,1,2,0,"Surround 5.1""#,
            r#"SINFO:0,1,3,0,"eng""#,
            r#"SINFO:0,1,4,0,"English""#,
            r#"SINFO:0,1,14,0,"6""#,
            r#"SINFO:0,1,17,0,"48000""#,
            r#"SINFO:0,1,40,0,"5.1(side)""#,
            r#"SINFO:0,2,1,6203,"Subtitles""#,
            r#"SINFO:0,2,3,0,"ger""#,
        ])
        .unwrap();

        let streams = &output.titles[0].streams;
        assert_eq!(streams.len(), 3);
        assert_eq!(streams[0].stream_type, Some(StreamType::Video));
        assert_eq!(streams[0].framerate, Some(23.976));
        assert_eq!(streams[0].dimensions.as_deref(), Some("1920x1080"));
        assert_eq!(streams[1].stream_type, Some(StreamType::Audio));
        assert_eq!(streams[1].downmix.as_deref(), Some("Surround 5.1"));
        assert_eq!(streams[1].langcode.as_deref(), Some("en"));
        assert_eq!(streams[1].channel_count, Some(6));
        assert_eq!(streams[1].samplerate, Some(48000));
        assert_eq!(streams[1].channel_layout.as_deref(), Some("5.1(side)"));
        assert_eq!(streams[2].stream_type, Some(StreamType::Subtitles));
        assert_eq!(streams[2].langcode.as_deref(), Some("de"));
    }

    #[test]
    fn test_items_created_on_demand() {
        let output = parse_log([r#"SINFO:2,1,2,0,"Stereo""#]).unwrap();
        assert_eq!(output.titles.len(), 3);
        assert!(output.titles[0].streams.is_empty());
        assert_eq!(output.titles[2].streams.len(), 2);
    }

    #[test]
    fn test_progress_handler() {
        let mut updates = Vec::new();
        let mut handler = |title: &str, current: u32, max: u32| {
            updates.push((title.to_string(), current, max));
        };
        let mut parser = OutputParser::with_progress(&mut handler);
        for line in [
            "PRGV:0,0,65536",
            r#"PRGC:5018,0,"Scanning CD-ROM devices""#,
            "PRGV:100,200,65536",
        ] {
            parser.feed(line).unwrap();
        }
        drop(parser);

        assert_eq!(
            updates,
            vec![
                (String::new(), 0, 65536),
                ("Scanning CD-ROM devices".to_string(), 100, 65536),
            ]
        );
    }

    #[test]
    fn test_critical_message() {
        let err = parse_log([
            r#"MSG:1005,0,1,"MakeMKV v1.17.4 started","%1 started","MakeMKV v1.17.4""#,
            r#"MSG:5010,0,0,"Failed to open disc","Failed to open disc""#,
            "TCOUNT:1",
        ])
        .unwrap_err();
        assert!(matches!(err, MakeMkvError::Critical(msg) if msg == "Failed to open disc"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let output = parse_log([
            "",
            "not robot output",
            "UNKNOWN:1,2",
            "TCOUNT:x",
            r#"TINFO:0,8,0,"many""#,
            "TCOUNT:2",
        ])
        .unwrap();
        assert_eq!(output.title_count, Some(2));
        assert_eq!(output.titles.len(), 1);
        assert_eq!(output.titles[0].chapter_count, None);
    }
}
