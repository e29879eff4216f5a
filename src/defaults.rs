// src/defaults.rs
// Named defaults for locating and driving makemkvcon

// =================================
// Environment variables
// =================================
pub const ENV_MAKEMKVCON: &str = "MAKEMKVCON"; // Explicit path to makemkvcon
pub const ENV_LOG_LEVEL: &str = "MAKEMKV_LOG_LEVEL"; // "debug", "json:trace", ...
pub const ENV_LOG_PATH: &str = "MAKEMKV_LOG_PATH"; // JSON log file, stderr when unset
pub const ENV_NO_PROGRESS: &str = "MAKEMKV_NO_PROGRESS"; // Truthy hides progress bars

// =================================
// makemkvcon
// =================================
pub const DEFAULT_BINARY_NAME: &str = "makemkvcon";

#[cfg(windows)]
pub const DEFAULT_BINARY_LOCATIONS: &[&str] = &[
    "C:\\Program Files\\MakeMKV\\makemkvcon.exe",
    "C:\\Program Files (x86)\\MakeMKV\\makemkvcon.exe",
];
#[cfg(not(windows))]
pub const DEFAULT_BINARY_LOCATIONS: &[&str] = &[];

/// Arguments passed on every invocation
pub const ROBOT_ARGS: &[&str] = &["--robot", "--progress=-same", "--noscan"];

/// Disc index that matches no drive; `info` on it only lists drives
pub const DRIVE_SCAN_DISC: u32 = 9999;

/// TINFO/SINFO lines indexing past these are dropped
pub const MAX_TITLES: usize = 4096;
pub const MAX_STREAMS: usize = 1024;

pub const DEFAULT_DISC_NR: u32 = 0;
pub const DEFAULT_TITLE: &str = "0";

// =================================
// Logging
// =================================
pub const DEFAULT_LOG_LEVEL: &str = "info";
