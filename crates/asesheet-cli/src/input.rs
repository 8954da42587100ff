//! Catalog sources selectable from the command line.

use anyhow::{Context, Result};
use asesheet_core::{load_spritesheet_embedded, load_spritesheet_from_dir, Spritesheet};
use std::path::PathBuf;

use crate::embedded::SPRITES;

/// Default root directory when none is given.
pub const DEFAULT_ROOT: &str = "sprites";

/// Where a catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A directory on the local filesystem.
    Dir(PathBuf),
    /// The sprite tree embedded in this binary.
    Embedded,
}

impl CatalogSource {
    /// Picks the source from the `--root` / `--embedded` flags.
    pub fn from_args(root: Option<&str>, embedded: bool) -> Self {
        if embedded {
            CatalogSource::Embedded
        } else {
            CatalogSource::Dir(PathBuf::from(root.unwrap_or(DEFAULT_ROOT)))
        }
    }

    /// Loads the full catalog.
    pub fn load(&self) -> Result<Spritesheet> {
        match self {
            CatalogSource::Dir(root) => load_spritesheet_from_dir(root)
                .with_context(|| format!("failed to load sprites from '{}'", root.display())),
            CatalogSource::Embedded => load_spritesheet_embedded(&SPRITES, "")
                .context("failed to load embedded sprites"),
        }
    }

    /// Human-readable description for log and report output.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Dir(root) => root.display().to_string(),
            CatalogSource::Embedded => "<embedded>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        assert_eq!(
            CatalogSource::from_args(None, false),
            CatalogSource::Dir(PathBuf::from("sprites"))
        );
        assert_eq!(
            CatalogSource::from_args(Some("art"), false),
            CatalogSource::Dir(PathBuf::from("art"))
        );
        assert_eq!(CatalogSource::from_args(None, true), CatalogSource::Embedded);
    }

    #[test]
    fn test_missing_dir_reports_root() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = CatalogSource::Dir(missing).load().unwrap_err();
        assert!(format!("{:#}", err).contains("nope"));
    }

    #[test]
    fn test_embedded_loads() {
        let sheet = CatalogSource::Embedded.load().unwrap();
        assert!(!sheet.is_empty());
    }
}
