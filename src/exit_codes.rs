//! Exit codes for the makemkv-rs binary

use crate::exceptions::MakeMkvError;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Invalid command-line arguments (clap's own usage errors also exit with 2)
pub const EXIT_INVALID_ARGS: i32 = 2;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// makemkvcon reported a critical error or exited with a non-zero code
pub const EXIT_MAKEMKV_ERROR: i32 = 102;

/// I/O error (info file not writable, output directory missing)
pub const EXIT_IO_ERROR: i32 = 106;

/// Dependency error (makemkvcon not installed)
pub const EXIT_DEPENDENCY_ERROR: i32 = 110;

/// Interrupted by Ctrl-C (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Exit code for a failed operation
pub fn for_error(err: &MakeMkvError) -> i32 {
    match err {
        MakeMkvError::BinaryNotFound(_) => EXIT_DEPENDENCY_ERROR,
        MakeMkvError::Critical(_) | MakeMkvError::ExitStatus(_) => EXIT_MAKEMKV_ERROR,
        MakeMkvError::Terminated => EXIT_INTERRUPTED,
        MakeMkvError::InvalidInput(_) => EXIT_INVALID_ARGS,
        MakeMkvError::IoError(_) | MakeMkvError::JsonError(_) => EXIT_IO_ERROR,
        MakeMkvError::Generic(_) => EXIT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            for_error(&MakeMkvError::BinaryNotFound(String::new())),
            EXIT_DEPENDENCY_ERROR
        );
        assert_eq!(for_error(&MakeMkvError::ExitStatus(3)), EXIT_MAKEMKV_ERROR);
        assert_eq!(for_error(&MakeMkvError::Terminated), EXIT_INTERRUPTED);
        assert_eq!(
            for_error(&MakeMkvError::IoError(std::io::Error::other("x"))),
            EXIT_IO_ERROR
        );
    }
}
