//! Error handling for the option selector
//!
//! Provides the library error type using thiserror. Configuration loading and
//! the binary use `anyhow` on top of this.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for source inspection
#[derive(Error, Debug)]
pub enum SelectorError {
    /// Source folder missing, not a directory, or unreadable
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source argument looked like a URL but could not be parsed
    #[error("Invalid URL '{address}': {reason}")]
    InvalidUrl { address: String, reason: String },
}

/// Result type alias for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;

impl SelectorError {
    /// Create an IO error for the given path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(address: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    /// Underlying IO error kind, if this is an IO error
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::InvalidUrl { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectorError::io(
            "/no/such/dir",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "IO error on /no/such/dir: not found");

        let err = SelectorError::invalid_url("http://", "empty host");
        assert_eq!(err.to_string(), "Invalid URL 'http://': empty host");
    }

    #[test]
    fn test_io_kind() {
        let err = SelectorError::io(
            "x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
        assert_eq!(SelectorError::invalid_url("a", "b").io_kind(), None);
    }
}
