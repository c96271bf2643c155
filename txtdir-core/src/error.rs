//! Error types for txtdir

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias
pub type TxtResult<T> = Result<T, TxtError>;

/// Broad grouping of errors, for callers deciding what to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The process environment could not supply a location
    Environment,
    /// A filesystem read failed
    Filesystem,
    /// Configuration could not be loaded
    Config,
}

/// Main error type
#[derive(Error, Debug)]
pub enum TxtError {
    #[error("Unable to determine source location: {0}")]
    SourceLocation(String),

    #[error("Unable to resolve absolute path for {path}: {source}")]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TxtError {
    /// Map an I/O error raised while reading `path` to the matching variant.
    pub fn from_read(path: &Path, err: std::io::Error) -> Self {
        let shown = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => TxtError::NotFound(shown),
            std::io::ErrorKind::PermissionDenied => TxtError::PermissionDenied(shown),
            _ if path.exists() && !path.is_dir() => TxtError::NotADirectory(shown),
            _ => TxtError::Io(err),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            TxtError::SourceLocation(_) | TxtError::AbsolutePath { .. } => ErrorClass::Environment,
            TxtError::NotFound(_)
            | TxtError::NotADirectory(_)
            | TxtError::PermissionDenied(_)
            | TxtError::Io(_) => ErrorClass::Filesystem,
            TxtError::Config(_) => ErrorClass::Config,
        }
    }

    pub fn is_environment(&self) -> bool {
        self.class() == ErrorClass::Environment
    }

    pub fn is_filesystem(&self) -> bool {
        self.class() == ErrorClass::Filesystem
    }
}
