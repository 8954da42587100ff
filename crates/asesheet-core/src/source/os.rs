use log::warn;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use super::{SourceEntry, SourceTree};
use crate::error::{Result, SheetError};

/// The live filesystem.
///
/// Entries are returned sorted by name so that loads are deterministic
/// across platforms. Entries whose names are not valid UTF-8 cannot be keyed
/// and are skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsTree;

impl OsTree {
    pub fn new() -> Self {
        OsTree
    }
}

impl SourceTree for OsTree {
    fn list_entries(&self, path: &Path) -> Result<Vec<SourceEntry>> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SheetError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SheetError::io(path, e),
        })?;
        if !metadata.is_dir() {
            return Err(SheetError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| SheetError::io(path, e))? {
            let entry = entry.map_err(|e| SheetError::io(path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| SheetError::io(entry.path(), e))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(
                        "skipping non-UTF-8 entry {:?} in {}",
                        raw,
                        path.display()
                    );
                    continue;
                }
            };
            entries.push(SourceEntry {
                name,
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Cow<'_, [u8]>> {
        fs::read(path)
            .map(Cow::Owned)
            .map_err(|e| SheetError::io(path, e))
    }
}
