//! makemkv - MakeMKV identifier tables and a makemkvcon wrapper
//!
//! [`apdefs`] mirrors the numeric contract of MakeMKV's `apdefs.h`: message
//! flags, drive states, localized string IDs, item attribute IDs and setting
//! IDs. The rest of the crate drives `makemkvcon` in robot mode and turns its
//! output into [`MakeMkvOutput`].

#![deny(
    // Safety
    unsafe_code,

    // Future compatibility
    future_incompatible,
)]
#![warn(
    rust_2018_idioms,
    missing_debug_implementations,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod apdefs;
pub mod cli;
pub mod defaults;
pub mod exceptions;
pub mod exit_codes;
pub mod input;
pub mod lang;
pub mod logger;
pub mod progress;
pub mod robot;
pub mod runner;
pub mod types;
pub mod utils;
pub mod version;

pub use apdefs::{ItemAttributeId, SettingId};
pub use exceptions::{MakeMkvError, Result};
pub use input::Input;
pub use progress::ProgressParser;
pub use robot::{OutputParser, ProgressHandler, parse_log};
pub use runner::{KillHandle, MakeMkv, Overrides, TitleSelection, find_makemkvcon};
pub use types::{Disc, DiscType, Drive, MakeMkvOutput, Stream, StreamType, Title};
