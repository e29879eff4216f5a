//! Item attribute identifiers (`AP_ItemAttributeId`)
//!
//! Every CINFO, TINFO and SINFO line names the attribute it carries by one of
//! these numbers. The values are part of the robot-mode output format and must
//! never be renumbered.

use super::InvalidId;
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

/// Metadata field of a disc, title, track, chapter or attachment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, FromRepr, IntoStaticStr,
)]
#[repr(u32)]
pub enum ItemAttributeId {
    Unknown = 0,
    Type = 1,
    Name = 2,
    LangCode = 3,
    LangName = 4,
    CodecId = 5,
    CodecShort = 6,
    CodecLong = 7,
    ChapterCount = 8,
    Duration = 9,
    DiskSize = 10,
    DiskSizeBytes = 11,
    StreamTypeExtension = 12,
    Bitrate = 13,
    AudioChannelsCount = 14,
    AngleInfo = 15,
    SourceFileName = 16,
    AudioSampleRate = 17,
    AudioSampleSize = 18,
    VideoSize = 19,
    VideoAspectRatio = 20,
    VideoFrameRate = 21,
    StreamFlags = 22,
    DateTime = 23,
    OriginalTitleId = 24,
    SegmentsCount = 25,
    SegmentsMap = 26,
    OutputFileName = 27,
    MetadataLanguageCode = 28,
    MetadataLanguageName = 29,
    TreeInfo = 30,
    PanelTitle = 31,
    VolumeName = 32,
    OrderWeight = 33,
    OutputFormat = 34,
    OutputFormatDescription = 35,
    SeamlessInfo = 36,
    PanelText = 37,
    MkvFlags = 38,
    MkvFlagsText = 39,
    AudioChannelLayoutName = 40,
    OutputCodecShort = 41,
    OutputConversionType = 42,
    OutputAudioSampleRate = 43,
    OutputAudioSampleSize = 44,
    OutputAudioChannelsCount = 45,
    OutputAudioChannelLayoutName = 46,
    OutputAudioChannelLayout = 47,
    OutputAudioMixDescription = 48,
    Comment = 49,
    OffsetSequenceId = 50,
    /// Upper bound, never sent on the wire
    MaxValue = 51,
}

impl ItemAttributeId {
    /// Numeric value as used in robot output
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// True for real attributes, false for `Unknown` and `MaxValue`
    pub const fn is_valid(self) -> bool {
        let v = self as u32;
        v > 0 && v < Self::MaxValue as u32
    }

    /// Iterate every real attribute in numeric order
    pub fn real() -> impl Iterator<Item = Self> {
        Self::iter().filter(|id| id.is_valid())
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u32> for ItemAttributeId {
    type Error = InvalidId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(InvalidId::new("AP_ItemAttributeId", value))
    }
}

impl From<ItemAttributeId> for u32 {
    fn from(id: ItemAttributeId) -> Self {
        id as u32
    }
}

impl std::fmt::Display for ItemAttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(ItemAttributeId::Unknown.value(), 0);
        assert_eq!(ItemAttributeId::Type.value(), 1);
        assert_eq!(
            ItemAttributeId::MaxValue.value() as usize,
            1 + ItemAttributeId::real().count()
        );
        assert_eq!(ItemAttributeId::COUNT, 52);
        for id in ItemAttributeId::real() {
            assert!(id.value() > 0 && id.value() < ItemAttributeId::MaxValue.value());
        }
        assert!(!ItemAttributeId::Unknown.is_valid());
        assert!(!ItemAttributeId::MaxValue.is_valid());
    }

    #[test]
    fn test_values_are_sequential() {
        for (expected, id) in ItemAttributeId::iter().enumerate() {
            assert_eq!(id.value() as usize, expected);
        }
    }

    #[test]
    fn test_round_trip_every_variant() {
        for id in ItemAttributeId::iter() {
            assert_eq!(ItemAttributeId::try_from(u32::from(id)), Ok(id));
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = ItemAttributeId::try_from(52).unwrap_err();
        assert_eq!(err.value(), 52);
        assert_eq!(err.to_string(), "52 is not a valid AP_ItemAttributeId");
    }

    #[test]
    fn test_known_robot_ids() {
        assert_eq!(ItemAttributeId::try_from(27), Ok(ItemAttributeId::OutputFileName));
        assert_eq!(ItemAttributeId::try_from(30), Ok(ItemAttributeId::TreeInfo));
        assert_eq!(ItemAttributeId::try_from(49), Ok(ItemAttributeId::Comment));
        assert_eq!(ItemAttributeId::VideoFrameRate.to_string(), "VideoFrameRate(21)");
    }
}
