//! Directory entries

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fs;

/// Entry kind, taken from the entry itself (symlinks are not followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

/// An immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Display form of the name; invalid UTF-8 is replaced
    pub name: String,
    pub kind: EntryKind,
    /// Name exactly as the filesystem reported it
    #[serde(skip)]
    os_name: OsString,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            os_name: OsString::from(&name),
            name,
            kind,
        }
    }

    /// Build from a `read_dir` item.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> std::io::Result<Self> {
        let kind = entry.file_type().map(EntryKind::from)?;
        let os_name = entry.file_name();
        Ok(Self {
            name: os_name.to_string_lossy().into_owned(),
            kind,
            os_name,
        })
    }

    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }

    /// Name bytes for output. Unix names are passed through untouched.
    #[cfg(unix)]
    pub fn name_bytes(&self) -> &[u8] {
        use std::os::unix::ffi::OsStrExt;
        self.os_name.as_bytes()
    }

    #[cfg(not(unix))]
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
