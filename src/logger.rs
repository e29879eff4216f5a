//! Logging setup for makemkv
//!
//! Human readable output goes through `env_logger`; a `json:` prefix on the
//! level (`json:debug`) switches to one JSON object per line, written to
//! `MAKEMKV_LOG_PATH` when set and stderr otherwise.

use crate::defaults::{DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL, ENV_LOG_PATH};
use chrono::{Local, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON logger implementation
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<std::fs::File>>,
}

/// Parsed form of a level string such as `info` or `json:trace`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSpec {
    pub json: bool,
    pub level: LevelFilter,
}

impl LogSpec {
    pub fn parse(level_str: &str) -> LogSpec {
        let level_str = level_str.trim().to_ascii_lowercase();
        let (json, actual) = if let Some(stripped) = level_str.strip_prefix("json:") {
            (true, stripped)
        } else if level_str == "json" {
            (true, "info")
        } else {
            (false, level_str.as_str())
        };
        LogSpec {
            json,
            level: parse_level(actual).unwrap_or(LevelFilter::Info),
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl JsonLogger {
    /// Create a new JSON logger
    pub fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = if let Some(path) = log_path {
            OpenOptions::new().create(true).append(true).open(path).ok()
        } else {
            None
        };

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Install the global logger described by `spec`
    pub fn init_with_spec(spec: LogSpec) {
        if !spec.json {
            let result = env_logger::Builder::new()
                .filter_level(spec.level)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return;
        }

        let Some(level) = spec.level.to_level() else {
            log::set_max_level(LevelFilter::Off);
            return;
        };
        let logger = Box::new(JsonLogger::new(level, env::var(ENV_LOG_PATH).ok()));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return;
        }
        log::set_max_level(spec.level);
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        });

        let json_string = format!(
            "{}\n",
            serde_json::to_string(&log_entry).unwrap_or_default()
        );

        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(json_string.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(json_string.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

/// Level for the command line: `--verbose`/`--quiet` override the level
/// from `MAKEMKV_LOG_LEVEL` but keep its output format.
pub fn cli_spec(verbose: bool, quiet: bool) -> LogSpec {
    let level = env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    spec_with_flags(&level, verbose, quiet)
}

fn spec_with_flags(level: &str, verbose: bool, quiet: bool) -> LogSpec {
    let mut spec = LogSpec::parse(level);
    if verbose {
        spec.level = LevelFilter::Debug;
    } else if quiet {
        spec.level = LevelFilter::Error;
    }
    spec
}

/// Helper to check if JSON logging is enabled
pub fn is_json_logging() -> bool {
    env::var(ENV_LOG_LEVEL)
        .map(|v| v.starts_with("json"))
        .unwrap_or(false)
}
