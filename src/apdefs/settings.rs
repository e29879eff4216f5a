//! Persisted setting keys (`ApSettingId`)
//!
//! Values are assigned by position, in the same order MakeMKV declares them,
//! so new keys may only ever be appended before `MaxValue`. Each key also has
//! the textual name MakeMKV uses in its settings file (`app_DestinationDir`).
//!
//! The `deprecated_s_*` keys are kept so stored numbers keep decoding, but
//! naming them from new code triggers a deprecation warning.

// Derived impls and the helpers below still have to mention the retired keys.
#![allow(deprecated)]

use super::InvalidId;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u32)]
pub enum SettingId {
    Unknown = 0,
    #[strum(serialize = "dvd_MinimumTitleLength")]
    DvdMinimumTitleLength,
    #[strum(serialize = "dvd_TestMTL")]
    DvdTestMtl,
    #[strum(serialize = "dvd_SPRemoveMethod")]
    DvdSpRemoveMethod,
    #[strum(serialize = "app_DataDir")]
    AppDataDir,
    #[strum(serialize = "app_Key")]
    AppKey,
    #[strum(serialize = "app_KeyHash")]
    AppKeyHash,
    #[strum(serialize = "io_ErrorRetryCount")]
    IoErrorRetryCount,
    #[strum(serialize = "io_IgnoreReadErrors")]
    IoIgnoreReadErrors,
    #[strum(serialize = "io_RBufSizeMB")]
    IoRBufSizeMb,
    #[strum(serialize = "io_TIPS_Server")]
    IoTipsServer,
    #[strum(serialize = "app_ExpertMode")]
    AppExpertMode,
    #[strum(serialize = "io_DarwinK2Workaround")]
    IoDarwinK2Workaround,
    #[strum(serialize = "fs_ForceIsoForUDF102")]
    FsForceIsoForUdf102,
    #[strum(serialize = "app_DestinationType")]
    AppDestinationType,
    #[strum(serialize = "app_DestinationDir")]
    AppDestinationDir,
    #[strum(serialize = "app_ShowDebug")]
    AppShowDebug,
    #[strum(serialize = "app_DebugKey")]
    AppDebugKey,
    #[strum(serialize = "app_PreferredLanguage")]
    AppPreferredLanguage,
    #[strum(serialize = "app_BackupDecrypted")]
    AppBackupDecrypted,
    #[strum(serialize = "app_InterfaceLanguage")]
    AppInterfaceLanguage,
    #[strum(serialize = "app_UpdateEnable")]
    AppUpdateEnable,
    #[strum(serialize = "app_UpdateLastCheck")]
    AppUpdateLastCheck,
    #[strum(serialize = "io_SingleDrive")]
    IoSingleDrive,
    #[strum(serialize = "app_ShowAVSyncMessages")]
    AppShowAvSyncMessages,
    #[strum(serialize = "bdplus_DumpAlways")]
    BdplusDumpAlways,
    #[deprecated(note = "streaming server settings are no longer read or written")]
    #[strum(serialize = "deprecated_s_EnableUPNP")]
    DeprecatedStreamEnableUpnp,
    #[deprecated(note = "streaming server settings are no longer read or written")]
    #[strum(serialize = "deprecated_s_BindIp")]
    DeprecatedStreamBindIp,
    #[deprecated(note = "streaming server settings are no longer read or written")]
    #[strum(serialize = "deprecated_s_BindPort")]
    DeprecatedStreamBindPort,
    #[strum(serialize = "screen_geometry")]
    ScreenGeometry,
    #[strum(serialize = "screen_state")]
    ScreenState,
    #[strum(serialize = "app_DefaultProfileName")]
    AppDefaultProfileName,
    #[strum(serialize = "app_DefaultSelectionString")]
    AppDefaultSelectionString,
    #[strum(serialize = "app_Java")]
    AppJava,
    #[strum(serialize = "app_ccextractor")]
    AppCcextractor,
    #[strum(serialize = "app_SiteInfoString")]
    AppSiteInfoString,
    #[strum(serialize = "path_OpenFile")]
    PathOpenFile,
    #[strum(serialize = "path_DestDir")]
    PathDestDir,
    #[strum(serialize = "path_BackupDirMRU")]
    PathBackupDirMru,
    #[strum(serialize = "path_DestDirMRU")]
    PathDestDirMru,
    #[strum(serialize = "app_DefaultOutputFileName")]
    AppDefaultOutputFileName,
    #[strum(serialize = "sdf_Stop")]
    SdfStop,
    #[strum(serialize = "app_Proxy")]
    AppProxy,
    MaxValue,
}

impl SettingId {
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// True for real keys, false for `Unknown` and `MaxValue`
    pub const fn is_valid(self) -> bool {
        let v = self as u32;
        v > 0 && v < Self::MaxValue as u32
    }

    /// Retired keys that only exist so old stored values still decode
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::DeprecatedStreamEnableUpnp
                | Self::DeprecatedStreamBindIp
                | Self::DeprecatedStreamBindPort
        )
    }

    /// Iterate every real key, deprecated ones included
    pub fn real() -> impl Iterator<Item = Self> {
        Self::iter().filter(|id| id.is_valid())
    }

    /// Iterate the keys new code may still write
    pub fn current() -> impl Iterator<Item = Self> {
        Self::real().filter(|id| !id.is_deprecated())
    }

    /// Settings file key, `None` for the two sentinels
    pub fn key(self) -> Option<&'static str> {
        if self.is_valid() {
            Some(self.into())
        } else {
            None
        }
    }

    /// Resolve a settings file key such as `io_ErrorRetryCount`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::from_str(key).ok().filter(|id| id.is_valid())
    }
}

impl TryFrom<u32> for SettingId {
    type Error = InvalidId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(InvalidId::new("ApSettingId", value))
    }
}

impl From<SettingId> for u32 {
    fn from(id: SettingId) -> Self {
        id as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounds() {
        assert_eq!(SettingId::Unknown.value(), 0);
        assert_eq!(SettingId::MaxValue.value(), 43);
        assert_eq!(
            SettingId::MaxValue.value() as usize,
            1 + SettingId::real().count()
        );
        assert_eq!(SettingId::COUNT, 44);
        for id in SettingId::real() {
            assert!(id.value() > 0 && id.value() < SettingId::MaxValue.value());
        }
    }

    #[test]
    fn test_auto_increment_positions() {
        assert_eq!(SettingId::DvdMinimumTitleLength.value(), 1);
        assert_eq!(SettingId::IoErrorRetryCount.value(), 7);
        assert_eq!(SettingId::AppDestinationDir.value(), 15);
        assert_eq!(SettingId::AppInterfaceLanguage.value(), 20);
        assert_eq!(SettingId::DeprecatedStreamEnableUpnp.value(), 26);
        assert_eq!(SettingId::ScreenGeometry.value(), 29);
        assert_eq!(SettingId::AppProxy.value(), 42);
    }

    #[test]
    fn test_round_trip_every_variant() {
        for id in SettingId::iter() {
            assert_eq!(SettingId::try_from(u32::from(id)), Ok(id));
        }
        assert!(SettingId::try_from(44).is_err());
    }

    #[test]
    fn test_keys_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for id in SettingId::real() {
            let key = id.key().unwrap();
            assert!(seen.insert(key), "duplicate key {key}");
            assert_eq!(SettingId::from_key(key), Some(id));
        }
        assert_eq!(SettingId::Unknown.key(), None);
        assert_eq!(SettingId::MaxValue.key(), None);
        assert_eq!(SettingId::from_key("Unknown"), None);
        assert_eq!(SettingId::from_key("MaxValue"), None);
        assert_eq!(SettingId::from_key("app_destinationdir"), None);
    }

    #[test]
    fn test_deprecated_keys() {
        let deprecated: Vec<_> = SettingId::real().filter(|id| id.is_deprecated()).collect();
        assert_eq!(deprecated.len(), 3);
        assert_eq!(SettingId::current().count(), 39);
        assert!(SettingId::current().all(|id| !id.key().unwrap().starts_with("deprecated_")));
        assert_eq!(
            SettingId::from_key("deprecated_s_BindPort"),
            Some(SettingId::DeprecatedStreamBindPort)
        );
    }
}
