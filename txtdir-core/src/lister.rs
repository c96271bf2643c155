//! Directory listing
//!
//! Reads the immediate children of a directory and writes their names, one
//! per line. Nothing is filtered and nothing is recursed into.

use crate::entry::DirectoryEntry;
use crate::error::{TxtError, TxtResult};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Output order for listed names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Whatever order the operating system returns
    #[default]
    Native,
    /// Sorted by name, byte-wise
    Name,
}

/// Lists directory entry names
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister {
    order: ListOrder,
}

impl DirectoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Read every entry of `dir` before returning.
    pub fn read_entries(&self, dir: impl AsRef<Path>) -> TxtResult<Vec<DirectoryEntry>> {
        let dir = dir.as_ref();
        let read_dir = fs::read_dir(dir).map_err(|e| {
            tracing::warn!(path = %dir.display(), error = %e, "failed to read directory");
            TxtError::from_read(dir, e)
        })?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item?;
            entries.push(DirectoryEntry::from_dir_entry(&item)?);
        }

        if self.order == ListOrder::Name {
            entries.sort_by(|a, b| a.os_name().cmp(b.os_name()));
        }

        tracing::debug!(path = %dir.display(), count = entries.len(), "read directory");
        Ok(entries)
    }

    /// Write one name per line to `out`, returning the number of lines.
    ///
    /// If the directory cannot be read, nothing is written.
    pub fn list_to<W: Write>(&self, dir: impl AsRef<Path>, out: &mut W) -> TxtResult<usize> {
        let entries = self.read_entries(dir)?;
        for entry in &entries {
            out.write_all(entry.name_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(entries.len())
    }

    /// Print one name per line to standard output.
    pub fn list(&self, dir: impl AsRef<Path>) -> TxtResult<usize> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.list_to(dir, &mut lock)
    }
}
