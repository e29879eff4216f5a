// src/apdefs/constants.rs
// Flag and state constants shared between makemkvcon and its front-ends.
// Names follow apdefs.h so they can be grepped across both sides.
// For localized string IDs, see strings.rs

#![allow(non_upper_case_globals)]

// Limits
pub const AP_MaxCdromDevices: u32 = 16;
pub const AP_Progress_MaxValue: u32 = 65536; // PRGV max column
pub const AP_Progress_MaxLayoutItems: u32 = 10;

// Message box kinds and message flags (MSG flags column)
pub const AP_UIMSG_BOX_MASK: u32 = 3854; // 0x0f0e
pub const AP_UIMSG_BOXOK: u32 = 260; // 0x0104
pub const AP_UIMSG_BOXERROR: u32 = 516; // 0x0204
pub const AP_UIMSG_BOXWARNING: u32 = 1028; // 0x0404
pub const AP_UIMSG_BOXYESNO: u32 = 776; // 0x0308
pub const AP_UIMSG_BOXYESNO_ERR: u32 = 1288; // 0x0508
pub const AP_UIMSG_YES: u32 = 0;
pub const AP_UIMSG_NO: u32 = 1;
pub const AP_UIMSG_DEBUG: u32 = 32;
pub const AP_UIMSG_HIDDEN: u32 = 64;
pub const AP_UIMSG_EVENT: u32 = 128;
pub const AP_UIMSG_HAVE_URL: u32 = 131072;
pub const AP_UIMSG_VITEM_BASE: u32 = 5200;

// Disc protection flags
pub const AP_MMBD_DISC_FLAG_BUSENC: u32 = 2;
pub const AP_MMBD_MMBD_DISC_FLAG_AACS: u32 = 4;
pub const AP_MMBD_MMBD_DISC_FLAG_BDPLUS: u32 = 8;

// Application value strings
pub const AP_vastr_Name: u32 = 0;
pub const AP_vastr_Version: u32 = 1;
pub const AP_vastr_Platform: u32 = 2;
pub const AP_vastr_Build: u32 = 3;
pub const AP_vastr_KeyType: u32 = 4;
pub const AP_vastr_KeyFeatures: u32 = 5;
pub const AP_vastr_KeyExpiration: u32 = 6;
pub const AP_vastr_EvalState: u32 = 7;
pub const AP_vastr_ProgExpiration: u32 = 8;
pub const AP_vastr_LatestVersion: u32 = 9;
pub const AP_vastr_RestartRequired: u32 = 10;
pub const AP_vastr_ExpertMode: u32 = 11;
pub const AP_vastr_ProfileCount: u32 = 12;
pub const AP_vastr_ProgExpired: u32 = 13;
pub const AP_vastr_OutputFolderName: u32 = 14;
pub const AP_vastr_OutputBaseName: u32 = 15;
pub const AP_vastr_CurrentProfile: u32 = 16;
pub const AP_vastr_OpenFileFilter: u32 = 17;
pub const AP_vastr_WebSiteURL: u32 = 18;
pub const AP_vastr_OpenDVDFileFilter: u32 = 19;
pub const AP_vastr_DefaultSelectionString: u32 = 20;
pub const AP_vastr_DefaultOutputFileName: u32 = 21;
pub const AP_vastr_ExternalAppItem: u32 = 22;
pub const AP_vastr_InterfaceLanguage: u32 = 23;
pub const AP_vastr_ProfileString: u32 = 24;

// Disc filesystem flags (DRV flags column)
pub const AP_DskFsFlagDvdFilesPresent: u32 = 1;
pub const AP_DskFsFlagHdvdFilesPresent: u32 = 2;
pub const AP_DskFsFlagBlurayFilesPresent: u32 = 4;
pub const AP_DskFsFlagAacsFilesPresent: u32 = 8;
pub const AP_DskFsFlagBdsvmFilesPresent: u32 = 16;

// Drive states (DRV state column)
pub const AP_DriveStateNoDrive: u32 = 256;
pub const AP_DriveStateUnmounting: u32 = 257;
pub const AP_DriveStateEmptyClosed: u32 = 0;
pub const AP_DriveStateEmptyOpen: u32 = 1;
pub const AP_DriveStateInserted: u32 = 2;
pub const AP_DriveStateLoading: u32 = 3;

// Notification and operation flags
pub const AP_Notify_UpdateLayoutFlag_NoTime: u32 = 1;
pub const AP_ProgressCurrentIndex_SourceName: u32 = 65280;
pub const AP_BackupFlagDecryptVideo: u32 = 1;
pub const AP_OpenFlagManualMode: u32 = 1;
pub const AP_UpdateDrivesFlagNoScan: u32 = 1;
pub const AP_UpdateDrivesFlagNoSingleDrive: u32 = 2;

// AV stream flags (attribute StreamFlags)
pub const AP_AVStreamFlag_DirectorsComments: u32 = 1;
pub const AP_AVStreamFlag_AlternateDirectorsComments: u32 = 2;
pub const AP_AVStreamFlag_ForVisuallyImpaired: u32 = 4;
pub const AP_AVStreamFlag_CoreAudio: u32 = 256;
pub const AP_AVStreamFlag_SecondaryAudio: u32 = 512;
pub const AP_AVStreamFlag_HasCoreAudio: u32 = 1024;
pub const AP_AVStreamFlag_DerivedStream: u32 = 2048;
pub const AP_AVStreamFlag_ForcedSubtitles: u32 = 4096;
pub const AP_AVStreamFlag_ProfileSecondaryStream: u32 = 16384;
pub const AP_AVStreamFlag_OffsetSequenceIdPresent: u32 = 32768;

// Upper bound of the localization table, kept as published
pub const AP_APP_LOC_MAX: u32 = 7000;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distinct(family: &[u32]) {
        for (i, a) in family.iter().enumerate() {
            for b in &family[i + 1..] {
                assert_ne!(a, b, "duplicate value {a} in family {family:?}");
            }
        }
    }

    #[test]
    fn test_box_kinds_are_inside_mask() {
        for kind in [
            AP_UIMSG_BOXOK,
            AP_UIMSG_BOXERROR,
            AP_UIMSG_BOXWARNING,
            AP_UIMSG_BOXYESNO,
            AP_UIMSG_BOXYESNO_ERR,
        ] {
            assert_eq!(kind & AP_UIMSG_BOX_MASK, kind);
        }
    }

    #[test]
    fn test_message_flags_outside_mask() {
        for flag in [
            AP_UIMSG_DEBUG,
            AP_UIMSG_HIDDEN,
            AP_UIMSG_EVENT,
            AP_UIMSG_HAVE_URL,
        ] {
            assert_eq!(flag & AP_UIMSG_BOX_MASK, 0);
        }
    }

    #[test]
    fn test_families_are_distinct() {
        assert_distinct(&[
            AP_UIMSG_BOXOK,
            AP_UIMSG_BOXERROR,
            AP_UIMSG_BOXWARNING,
            AP_UIMSG_BOXYESNO,
            AP_UIMSG_BOXYESNO_ERR,
        ]);
        assert_distinct(&[
            AP_DriveStateNoDrive,
            AP_DriveStateUnmounting,
            AP_DriveStateEmptyClosed,
            AP_DriveStateEmptyOpen,
            AP_DriveStateInserted,
            AP_DriveStateLoading,
        ]);
        assert_distinct(&[
            AP_DskFsFlagDvdFilesPresent,
            AP_DskFsFlagHdvdFilesPresent,
            AP_DskFsFlagBlurayFilesPresent,
            AP_DskFsFlagAacsFilesPresent,
            AP_DskFsFlagBdsvmFilesPresent,
        ]);
        assert_distinct(&[
            AP_AVStreamFlag_DirectorsComments,
            AP_AVStreamFlag_AlternateDirectorsComments,
            AP_AVStreamFlag_ForVisuallyImpaired,
            AP_AVStreamFlag_CoreAudio,
            AP_AVStreamFlag_SecondaryAudio,
            AP_AVStreamFlag_HasCoreAudio,
            AP_AVStreamFlag_DerivedStream,
            AP_AVStreamFlag_ForcedSubtitles,
            AP_AVStreamFlag_ProfileSecondaryStream,
            AP_AVStreamFlag_OffsetSequenceIdPresent,
        ]);
    }

    #[test]
    fn test_single_bit_flags() {
        for flag in [
            AP_DskFsFlagDvdFilesPresent,
            AP_DskFsFlagHdvdFilesPresent,
            AP_DskFsFlagBlurayFilesPresent,
            AP_DskFsFlagAacsFilesPresent,
            AP_DskFsFlagBdsvmFilesPresent,
            AP_AVStreamFlag_CoreAudio,
            AP_AVStreamFlag_ForcedSubtitles,
            AP_AVStreamFlag_OffsetSequenceIdPresent,
        ] {
            assert_eq!(flag.count_ones(), 1);
        }
    }

    #[test]
    fn test_vastr_sequence() {
        assert_eq!(AP_vastr_Name, 0);
        assert_eq!(AP_vastr_ProfileString, 24);
        assert_eq!(AP_vastr_InterfaceLanguage, AP_vastr_ProfileString - 1);
    }
}
