//! Error types for makemkv

use std::fmt;

/// Main error type for makemkv operations
#[derive(Debug)]
pub enum MakeMkvError {
    /// makemkvcon could not be located
    BinaryNotFound(String),

    /// makemkvcon reported a message with critical severity
    Critical(String),

    /// makemkvcon exited with a non-zero code
    ExitStatus(i32),

    /// makemkvcon was killed by a signal
    Terminated,

    /// Input path or title selection was unusable
    InvalidInput(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON encoding error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for MakeMkvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakeMkvError::BinaryNotFound(msg) => write!(f, "makemkvcon not found: {msg}"),
            MakeMkvError::Critical(msg) => write!(f, "makemkvcon failed: {msg}"),
            MakeMkvError::ExitStatus(code) => {
                write!(f, "makemkvcon exited with non-zero return code {code}")
            }
            MakeMkvError::Terminated => write!(f, "makemkvcon was terminated"),
            MakeMkvError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            MakeMkvError::IoError(err) => write!(f, "IO error: {err}"),
            MakeMkvError::JsonError(err) => write!(f, "JSON error: {err}"),
            MakeMkvError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MakeMkvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MakeMkvError::IoError(err) => Some(err),
            MakeMkvError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MakeMkvError {
    fn from(err: std::io::Error) -> Self {
        MakeMkvError::IoError(err)
    }
}

impl From<serde_json::Error> for MakeMkvError {
    fn from(err: serde_json::Error) -> Self {
        MakeMkvError::JsonError(err)
    }
}

impl From<anyhow::Error> for MakeMkvError {
    fn from(err: anyhow::Error) -> Self {
        MakeMkvError::Generic(err.to_string())
    }
}

/// Result type for makemkv operations
pub type Result<T> = std::result::Result<T, MakeMkvError>;
