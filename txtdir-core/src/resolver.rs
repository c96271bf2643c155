//! Data directory resolution
//!
//! The text data directory lives at a fixed offset from a base directory.
//! The base is either injected by the caller or taken from where this crate's
//! sources were built, which puts it at `<workspace>/data/txt`.

use crate::error::{TxtError, TxtResult};
use crate::path;
use std::path::{Path, PathBuf};

/// Offset of the text data directory from the base directory
pub const DEFAULT_DATA_RELATIVE: &str = "../../data/txt";

/// Directory of this crate's sources at build time
const SOURCE_DIR: Option<&str> = option_env!("CARGO_MANIFEST_DIR");

/// Computes the absolute path of the text data directory.
///
/// Resolution is purely lexical: the target is never checked for existence
/// and symlinks are not followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirResolver {
    base: PathBuf,
    relative: PathBuf,
}

impl DataDirResolver {
    /// Resolve relative to an explicit base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            relative: PathBuf::from(DEFAULT_DATA_RELATIVE),
        }
    }

    /// Resolve relative to the directory holding this crate's sources.
    pub fn from_source_location() -> TxtResult<Self> {
        Self::from_manifest_dir(SOURCE_DIR)
    }

    fn from_manifest_dir(manifest_dir: Option<&str>) -> TxtResult<Self> {
        let dir = manifest_dir.ok_or_else(|| {
            TxtError::SourceLocation("CARGO_MANIFEST_DIR was not set at build time".into())
        })?;
        Ok(Self::new(Path::new(dir).join("src")))
    }

    /// Replace the default `../../data/txt` offset.
    pub fn with_relative(mut self, relative: impl Into<PathBuf>) -> Self {
        self.relative = relative.into();
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Absolute, normalized path of the data directory.
    ///
    /// The current directory is only consulted when the base is relative.
    pub fn resolve(&self) -> TxtResult<PathBuf> {
        let resolved = path::absolutize(self.base().join(self.relative()))?;
        tracing::debug!(base = %self.base().display(), resolved = %resolved.display(), "resolved data directory");
        Ok(resolved)
    }

    /// Like [`resolve`](Self::resolve), with `cwd` standing in for the
    /// current directory.
    pub fn resolve_from(&self, cwd: impl AsRef<Path>) -> PathBuf {
        path::absolutize_from(self.base().join(self.relative()), cwd)
    }
}
