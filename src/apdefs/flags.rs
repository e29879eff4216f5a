//! Typed views over the raw flag and state constants

#![allow(non_upper_case_globals)]

use super::InvalidId;
use super::constants::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags column of a `MSG` line
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UiMsgFlags: u32 {
        const BOX_MASK = AP_UIMSG_BOX_MASK;
        const BOX_OK = AP_UIMSG_BOXOK;
        const BOX_ERROR = AP_UIMSG_BOXERROR;
        const BOX_WARNING = AP_UIMSG_BOXWARNING;
        const BOX_YES_NO = AP_UIMSG_BOXYESNO;
        const BOX_YES_NO_ERR = AP_UIMSG_BOXYESNO_ERR;
        const DEBUG = AP_UIMSG_DEBUG;
        const HIDDEN = AP_UIMSG_HIDDEN;
        const EVENT = AP_UIMSG_EVENT;
        const HAVE_URL = AP_UIMSG_HAVE_URL;
    }
}

/// Kind of dialog a message would open in the GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageBox {
    Ok,
    Error,
    Warning,
    YesNo,
    YesNoError,
}

impl UiMsgFlags {
    /// Box kind encoded in the masked bits, if any
    pub fn message_box(self) -> Option<MessageBox> {
        match self.bits() & AP_UIMSG_BOX_MASK {
            AP_UIMSG_BOXOK => Some(MessageBox::Ok),
            AP_UIMSG_BOXERROR => Some(MessageBox::Error),
            AP_UIMSG_BOXWARNING => Some(MessageBox::Warning),
            AP_UIMSG_BOXYESNO => Some(MessageBox::YesNo),
            AP_UIMSG_BOXYESNO_ERR => Some(MessageBox::YesNoError),
            _ => None,
        }
    }

    pub fn is_debug(self) -> bool {
        self.contains(Self::DEBUG)
    }

    pub fn is_hidden(self) -> bool {
        self.contains(Self::HIDDEN)
    }
}

bitflags! {
    /// Flags column of a `DRV` line: which disc structures were found
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DiskFsFlags: u32 {
        const DVD_FILES = AP_DskFsFlagDvdFilesPresent;
        const HDDVD_FILES = AP_DskFsFlagHdvdFilesPresent;
        const BLURAY_FILES = AP_DskFsFlagBlurayFilesPresent;
        const AACS_FILES = AP_DskFsFlagAacsFilesPresent;
        const BDSVM_FILES = AP_DskFsFlagBdsvmFilesPresent;
    }
}

bitflags! {
    /// Value of the `StreamFlags` item attribute
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StreamFlags: u32 {
        const DIRECTORS_COMMENTS = AP_AVStreamFlag_DirectorsComments;
        const ALTERNATE_DIRECTORS_COMMENTS = AP_AVStreamFlag_AlternateDirectorsComments;
        const FOR_VISUALLY_IMPAIRED = AP_AVStreamFlag_ForVisuallyImpaired;
        const CORE_AUDIO = AP_AVStreamFlag_CoreAudio;
        const SECONDARY_AUDIO = AP_AVStreamFlag_SecondaryAudio;
        const HAS_CORE_AUDIO = AP_AVStreamFlag_HasCoreAudio;
        const DERIVED_STREAM = AP_AVStreamFlag_DerivedStream;
        const FORCED_SUBTITLES = AP_AVStreamFlag_ForcedSubtitles;
        const PROFILE_SECONDARY_STREAM = AP_AVStreamFlag_ProfileSecondaryStream;
        const OFFSET_SEQUENCE_ID_PRESENT = AP_AVStreamFlag_OffsetSequenceIdPresent;
    }
}

bitflags! {
    /// Disc protection flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DiscProtection: u32 {
        const BUS_ENCRYPTION = AP_MMBD_DISC_FLAG_BUSENC;
        const AACS = AP_MMBD_MMBD_DISC_FLAG_AACS;
        const BDPLUS = AP_MMBD_MMBD_DISC_FLAG_BDPLUS;
    }
}

/// State column of a `DRV` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveState {
    EmptyClosed,
    EmptyOpen,
    Inserted,
    Loading,
    NoDrive,
    Unmounting,
}

impl DriveState {
    pub const fn value(self) -> u32 {
        match self {
            Self::EmptyClosed => AP_DriveStateEmptyClosed,
            Self::EmptyOpen => AP_DriveStateEmptyOpen,
            Self::Inserted => AP_DriveStateInserted,
            Self::Loading => AP_DriveStateLoading,
            Self::NoDrive => AP_DriveStateNoDrive,
            Self::Unmounting => AP_DriveStateUnmounting,
        }
    }

    /// A disc is in the drive (possibly still spinning up)
    pub const fn has_disc(self) -> bool {
        matches!(self, Self::Inserted | Self::Loading)
    }
}

impl TryFrom<u32> for DriveState {
    type Error = InvalidId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            AP_DriveStateEmptyClosed => Ok(Self::EmptyClosed),
            AP_DriveStateEmptyOpen => Ok(Self::EmptyOpen),
            AP_DriveStateInserted => Ok(Self::Inserted),
            AP_DriveStateLoading => Ok(Self::Loading),
            AP_DriveStateNoDrive => Ok(Self::NoDrive),
            AP_DriveStateUnmounting => Ok(Self::Unmounting),
            other => Err(InvalidId::new("AP_DriveState", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_box_kinds() {
        assert_eq!(
            UiMsgFlags::from_bits_retain(AP_UIMSG_BOXOK).message_box(),
            Some(MessageBox::Ok)
        );
        assert_eq!(
            UiMsgFlags::from_bits_retain(AP_UIMSG_BOXERROR | AP_UIMSG_DEBUG).message_box(),
            Some(MessageBox::Error)
        );
        assert_eq!(
            UiMsgFlags::from_bits_retain(AP_UIMSG_BOXYESNO_ERR | AP_UIMSG_HAVE_URL).message_box(),
            Some(MessageBox::YesNoError)
        );
        assert_eq!(UiMsgFlags::from_bits_retain(0).message_box(), None);
        assert_eq!(UiMsgFlags::from_bits_retain(AP_UIMSG_EVENT).message_box(), None);
    }

    #[test]
    fn test_box_constants_inside_mask() {
        for kind in [
            UiMsgFlags::BOX_OK,
            UiMsgFlags::BOX_ERROR,
            UiMsgFlags::BOX_WARNING,
            UiMsgFlags::BOX_YES_NO,
            UiMsgFlags::BOX_YES_NO_ERR,
        ] {
            assert!(UiMsgFlags::BOX_MASK.contains(kind));
        }
    }

    #[test]
    fn test_debug_and_hidden() {
        let flags = UiMsgFlags::from_bits_retain(AP_UIMSG_DEBUG | AP_UIMSG_HIDDEN);
        assert!(flags.is_debug());
        assert!(flags.is_hidden());
        assert!(!UiMsgFlags::BOX_OK.is_debug());
    }

    #[test]
    fn test_drive_state_round_trip() {
        for state in [
            DriveState::EmptyClosed,
            DriveState::EmptyOpen,
            DriveState::Inserted,
            DriveState::Loading,
            DriveState::NoDrive,
            DriveState::Unmounting,
        ] {
            assert_eq!(DriveState::try_from(state.value()), Ok(state));
        }
        assert!(DriveState::try_from(4).is_err());
        assert!(DriveState::Inserted.has_disc());
        assert!(!DriveState::NoDrive.has_disc());
    }

    #[test]
    fn test_stream_flags_decode() {
        let flags = StreamFlags::from_bits_truncate(4096 | 1 | 8);
        assert!(flags.contains(StreamFlags::FORCED_SUBTITLES));
        assert!(flags.contains(StreamFlags::DIRECTORS_COMMENTS));
        assert_eq!(flags.bits(), 4097);
    }
}
