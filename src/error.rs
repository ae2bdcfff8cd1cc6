//! Error types for base directory operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for base directory resolution, creation and lookup
#[derive(Error, Debug)]
pub enum XdgError {
    /// Empty or current-directory name argument
    #[error("{what} is empty")]
    EmptyName { what: &'static str },

    /// Name argument that is not a single path segment
    #[error("{what} must be a single path segment: {name:?}")]
    InvalidName { what: &'static str, name: String },

    /// File path argument without a trailing file name
    #[error("file path must end with a file name: {path:?}")]
    MissingFileName { path: String },

    /// A resolved base directory is not absolute
    #[error("path in {var} is relative: {path:?}")]
    RelativePath { var: &'static str, path: PathBuf },

    /// A scoped directory handle could not be opened, or a path resolved
    /// through it would leave the directory
    #[error("contained operation on {path:?} failed: {source}")]
    Containment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error from the underlying filesystem
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl XdgError {
    /// Whether the error was caused by the caller's arguments rather than
    /// by the environment or the filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            XdgError::EmptyName { .. }
                | XdgError::InvalidName { .. }
                | XdgError::MissingFileName { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        XdgError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn containment(path: impl Into<PathBuf>, source: io::Error) -> Self {
        XdgError::Containment {
            path: path.into(),
            source,
        }
    }
}

/// Result type for base directory operations
pub type Result<T> = std::result::Result<T, XdgError>;
