//! Static, read-only trees compiled into a binary.
//!
//! Trees are plain `static` data, typically generated by a build script:
//!
//! ```
//! use asesheet_core::source::{EmbeddedDir, EmbeddedEntry, EmbeddedFile};
//!
//! static SPRITES: EmbeddedDir = EmbeddedDir::new(
//!     "",
//!     &[
//!         EmbeddedEntry::File(EmbeddedFile::new("hero-idle.json", b"{}")),
//!         EmbeddedEntry::Dir(EmbeddedDir::new("enemies", &[])),
//!     ],
//! );
//!
//! assert_eq!(SPRITES.entries().len(), 2);
//! ```

use std::borrow::Cow;
use std::io;
use std::path::{Component, Path};

use super::{SourceEntry, SourceTree};
use crate::error::{Result, SheetError};

/// A file with its contents baked in.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFile {
    name: &'static str,
    contents: &'static [u8],
}

impl EmbeddedFile {
    pub const fn new(name: &'static str, contents: &'static [u8]) -> Self {
        Self { name, contents }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contents(&self) -> &'static [u8] {
        self.contents
    }
}

/// A directory node.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedDir {
    name: &'static str,
    entries: &'static [EmbeddedEntry],
}

impl EmbeddedDir {
    pub const fn new(name: &'static str, entries: &'static [EmbeddedEntry]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [EmbeddedEntry] {
        self.entries
    }

    /// Finds a direct subdirectory by name, ignoring files of the same name.
    pub fn get_dir(&self, name: &str) -> Option<&'static EmbeddedDir> {
        self.entries.iter().find_map(|entry| match entry {
            EmbeddedEntry::Dir(dir) if dir.name == name => Some(dir),
            _ => None,
        })
    }

    /// Finds a direct file by name, ignoring directories of the same name.
    pub fn get_file(&self, name: &str) -> Option<&'static EmbeddedFile> {
        self.entries.iter().find_map(|entry| match entry {
            EmbeddedEntry::File(file) if file.name == name => Some(file),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EmbeddedEntry {
    File(EmbeddedFile),
    Dir(EmbeddedDir),
}

impl EmbeddedEntry {
    pub fn name(&self) -> &'static str {
        match self {
            EmbeddedEntry::File(file) => file.name,
            EmbeddedEntry::Dir(dir) => dir.name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EmbeddedEntry::Dir(_))
    }
}

/// [`SourceTree`] over an embedded directory.
///
/// Paths are resolved relative to the root; `""` and `"."` name the root
/// itself. Entries are listed in the order they were embedded. A file and a
/// directory may share a name: directory lookups only see directories and
/// file reads only see files.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTree {
    root: &'static EmbeddedDir,
}

impl EmbeddedTree {
    pub fn new(root: &'static EmbeddedDir) -> Self {
        Self { root }
    }

    fn resolve_dir(&self, path: &Path) -> Result<&'static EmbeddedDir> {
        let not_found = || SheetError::NotFound {
            path: path.to_path_buf(),
        };

        let mut dir = self.root;
        for component in path.components() {
            let name = match component {
                Component::CurDir => continue,
                Component::Normal(name) => name.to_str().ok_or_else(not_found)?,
                _ => return Err(not_found()),
            };
            dir = match dir.get_dir(name) {
                Some(child) => child,
                None if dir.get_file(name).is_some() => {
                    return Err(SheetError::NotADirectory {
                        path: path.to_path_buf(),
                    })
                }
                None => return Err(not_found()),
            };
        }
        Ok(dir)
    }
}

impl SourceTree for EmbeddedTree {
    fn list_entries(&self, path: &Path) -> Result<Vec<SourceEntry>> {
        let dir = self.resolve_dir(path)?;
        Ok(dir
            .entries
            .iter()
            .map(|entry| SourceEntry {
                name: entry.name().to_string(),
                is_dir: entry.is_dir(),
            })
            .collect())
    }

    fn read_file(&self, path: &Path) -> Result<Cow<'_, [u8]>> {
        let not_found = || SheetError::NotFound {
            path: path.to_path_buf(),
        };
        let name = match path.components().next_back() {
            Some(Component::Normal(name)) => name.to_str().ok_or_else(not_found)?,
            _ => return Err(not_found()),
        };
        let parent = path.parent().ok_or_else(not_found)?;
        let dir = self.resolve_dir(parent)?;

        match dir.get_file(name) {
            Some(file) => Ok(Cow::Borrowed(file.contents)),
            None if dir.get_dir(name).is_some() => Err(SheetError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            )),
            None => Err(not_found()),
        }
    }
}
