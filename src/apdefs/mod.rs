//! MakeMKV identifier tables
//!
//! Numeric contract shared by makemkvcon and its front-ends: message flags,
//! drive states, stream flags, localized string IDs and the two closed
//! enumerations for item attributes and settings. Nothing here is computed at
//! runtime; the only fallible operations are integer to enum conversions.

pub mod attributes;
pub mod constants;
pub mod flags;
pub mod settings;
pub mod strings;

use std::fmt;

pub use attributes::ItemAttributeId;
pub use flags::{DiscProtection, DiskFsFlags, DriveState, MessageBox, StreamFlags, UiMsgFlags};
pub use settings::SettingId;
pub use strings::ResourceId;

/// An integer that does not name any member of an identifier family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidId {
    family: &'static str,
    value: u32,
}

impl InvalidId {
    pub(crate) const fn new(family: &'static str, value: u32) -> Self {
        InvalidId { family, value }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for InvalidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid {}", self.value, self.family)
    }
}

impl std::error::Error for InvalidId {}
