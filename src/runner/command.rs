//! makemkvcon discovery and argument assembly

use crate::defaults::{DEFAULT_BINARY_LOCATIONS, DEFAULT_BINARY_NAME, ENV_MAKEMKVCON, ROBOT_ARGS};
use crate::exceptions::{MakeMkvError, Result};
use log::{debug, trace};
use std::env;
use std::path::{Path, PathBuf};

/// Locate makemkvcon.
///
/// `MAKEMKVCON` wins when set, then `PATH`, then the platform's default
/// install locations.
pub fn find_makemkvcon() -> Result<PathBuf> {
    if let Some(explicit) = env::var_os(ENV_MAKEMKVCON).filter(|v| !v.is_empty()) {
        let explicit = PathBuf::from(explicit);
        if explicit.is_file() {
            debug!("🔍 Using makemkvcon from {ENV_MAKEMKVCON}: {}", explicit.display());
            return Ok(explicit);
        }
        return which::which(&explicit).map_err(|_| {
            MakeMkvError::BinaryNotFound(format!(
                "{ENV_MAKEMKVCON} points to {}, which is not an executable",
                explicit.display()
            ))
        });
    }

    if let Ok(path) = which::which(DEFAULT_BINARY_NAME) {
        debug!("🔍 Resolved {DEFAULT_BINARY_NAME} to {}", path.display());
        return Ok(path);
    }

    for location in DEFAULT_BINARY_LOCATIONS {
        let candidate = Path::new(location);
        trace!("🔍 Trying {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
    }

    Err(MakeMkvError::BinaryNotFound(
        "Make sure it is installed and in your PATH, or set MAKEMKVCON".to_string(),
    ))
}

/// Options shared by every makemkvcon subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Read cache size in megabytes
    pub cache: Option<u32>,
    /// Minimum title length in seconds
    pub minlength: Option<u32>,
}

impl Overrides {
    /// Values set here, falling back to `defaults`
    pub fn or(self, defaults: Overrides) -> Overrides {
        Overrides {
            cache: self.cache.or(defaults.cache),
            minlength: self.minlength.or(defaults.minlength),
        }
    }
}

/// Full argument list for one invocation, without the binary
pub(crate) fn build_args(
    subcommand: &str,
    positional: &[String],
    options: Overrides,
    decrypt: bool,
) -> Vec<String> {
    let mut args = Vec::with_capacity(positional.len() + ROBOT_ARGS.len() + 6);
    args.push(subcommand.to_string());
    args.extend(positional.iter().cloned());
    args.extend(ROBOT_ARGS.iter().map(|a| a.to_string()));

    // makemkvcon treats 0 as "use the configured value"
    if let Some(cache) = options.cache.filter(|&c| c > 0) {
        args.push("--cache".to_string());
        args.push(cache.to_string());
    }
    if let Some(minlength) = options.minlength.filter(|&m| m > 0) {
        args.push("--minlength".to_string());
        args.push(minlength.to_string());
    }
    if decrypt {
        args.push("--decrypt".to_string());
    }
    args
}
