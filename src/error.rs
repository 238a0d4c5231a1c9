//! Error handling for lsl
//!
//! Every failure the listing can hit is represented by [`LslError`]. Per-entry
//! and per-argument failures are reported and skipped by the lister; only a
//! broken output stream or bad configuration stops the run.

use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Error type for lsl operations
#[derive(Error, Debug)]
pub enum LslError {
    /// Metadata query for a specific entry failed
    #[error("{}: {source}", .path.display())]
    NotAccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Argument exists but cannot be opened as a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Argument cannot be opened at all
    #[error("No such file or directory")]
    NotFound(String),

    /// Argument exists but access was refused
    #[error("Permission denied")]
    PermissionDenied(String),

    /// A directory holds more entries than the collection accepts
    #[error("too many entries (limit {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Output stream errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LslError {
    /// Classify a failure to open `path` as a directory
    pub fn from_open(path: &str, err: io::Error) -> Self {
        match err.raw_os_error().map(Errno::from_raw) {
            Some(Errno::ENOTDIR) => Self::NotADirectory(path.to_string()),
            Some(Errno::EACCES) | Some(Errno::EPERM) => Self::PermissionDenied(path.to_string()),
            _ if err.kind() == io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(path.to_string())
            }
            _ => Self::NotFound(path.to_string()),
        }
    }
}

/// Specialized Result type for lsl operations
pub type Result<T> = std::result::Result<T, LslError>;

/// Creates an LslError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::LslError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

impl From<LslError> for io::Error {
    fn from(err: LslError) -> Self {
        match err {
            LslError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
