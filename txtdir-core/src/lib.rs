//! txtdir core
//!
//! Resolves the text data directory and lists directory entry names.

pub mod config;
pub mod entry;
pub mod error;
pub mod lister;
pub mod path;
pub mod resolver;

pub use config::TxtdirConfig;
pub use entry::{DirectoryEntry, EntryKind};
pub use error::{ErrorClass, TxtError, TxtResult};
pub use lister::{DirectoryLister, ListOrder};
pub use resolver::DataDirResolver;
