//! Directory walking and catalog assembly.
//!
//! A load lists the root, recurses into every subdirectory, and decodes
//! each *qualifying file*: a regular file whose name contains a `-` and ends
//! with the literal suffix `json`. The suffix test is deliberately loose
//! (`walk-cyclejson` qualifies too).
//!
//! Files are keyed by the part of their name before the first `.`; entries
//! from a subdirectory `D` are keyed `D/<key>`. Any failure aborts the whole
//! load.

use log::{debug, trace, warn};
use std::path::Path;

use crate::document::SpriteDocument;
use crate::error::Result;
use crate::source::{EmbeddedDir, EmbeddedTree, OsTree, SourceTree};
use crate::spritesheet::Spritesheet;

/// Returns true if a file with this base name is an animation source.
pub fn is_animation_source(name: &str) -> bool {
    name.contains('-') && name.ends_with("json")
}

/// Catalog key for a file: everything before the first `.`.
pub fn animation_key(name: &str) -> &str {
    match name.split_once('.') {
        Some((head, _)) => head,
        None => name,
    }
}

/// Loads every animation below `root` into a flat catalog.
///
/// Subdirectory entries are merged with their directory name prefixed to
/// the key. When two entries end up with the same key the one discovered
/// last wins.
pub fn load_spritesheet<T>(tree: &T, root: impl AsRef<Path>) -> Result<Spritesheet>
where
    T: SourceTree + ?Sized,
{
    let root = root.as_ref();
    let mut sheet = Spritesheet::new();

    for entry in tree.list_entries(root)? {
        let path = root.join(&entry.name);

        if entry.is_dir {
            let nested = load_spritesheet(tree, &path)?;
            debug!(
                "merged {} animation(s) from {}",
                nested.len(),
                path.display()
            );
            for key in sheet.merge_prefixed(&entry.name, nested) {
                warn!("animation '{}' replaced by {}", key, path.display());
            }
            continue;
        }

        if !is_animation_source(&entry.name) {
            trace!("skipping {}", path.display());
            continue;
        }

        let bytes = tree.read_file(&path)?;
        let frames = SpriteDocument::from_slice(&bytes)
            .and_then(|doc| doc.frames())
            .map_err(|e| e.with_path(&path))?;

        let key = animation_key(&entry.name);
        debug!(
            "decoded '{}' ({} frames) from {}",
            key,
            frames.len(),
            path.display()
        );
        if sheet.insert(key, frames).is_some() {
            warn!("animation '{}' replaced by {}", key, path.display());
        }
    }

    Ok(sheet)
}

/// Loads a catalog from a directory on the local filesystem.
pub fn load_spritesheet_from_dir(root: impl AsRef<Path>) -> Result<Spritesheet> {
    load_spritesheet(&OsTree::new(), root)
}

/// Loads a catalog from an embedded tree.
///
/// `root` is resolved inside `dir`; pass `""` to load the whole tree.
pub fn load_spritesheet_embedded(
    dir: &'static EmbeddedDir,
    root: impl AsRef<Path>,
) -> Result<Spritesheet> {
    load_spritesheet(&EmbeddedTree::new(dir), root)
}
