//! Read-only source trees the loader can walk.
//!
//! The loader only needs two capabilities: list the entries of a directory
//! and read the bytes of a file. [`SourceTree`] captures exactly that, and
//! is implemented by:
//!
//! - [`OsTree`]: the live filesystem
//! - [`EmbeddedTree`]: a static tree compiled into the binary

mod embedded;
mod os;

pub use embedded::{EmbeddedDir, EmbeddedEntry, EmbeddedFile, EmbeddedTree};
pub use os::OsTree;

use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;

/// A directory entry as seen by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Base name of the entry.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl SourceEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Creates a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Capability set required to load a catalog.
pub trait SourceTree {
    /// Lists the entries of the directory at `path`.
    ///
    /// Fails when the path does not exist or is not a directory.
    fn list_entries(&self, path: &Path) -> Result<Vec<SourceEntry>>;

    /// Reads the full contents of the file at `path`.
    fn read_file(&self, path: &Path) -> Result<Cow<'_, [u8]>>;
}

impl<T: SourceTree + ?Sized> SourceTree for &T {
    fn list_entries(&self, path: &Path) -> Result<Vec<SourceEntry>> {
        (**self).list_entries(path)
    }

    fn read_file(&self, path: &Path) -> Result<Cow<'_, [u8]>> {
        (**self).read_file(path)
    }
}
