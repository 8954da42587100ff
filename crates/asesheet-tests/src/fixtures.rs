//! Test fixture utilities for creating synthetic sprite trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Path to the checked-in `testdata/` directory.
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Builds an Aseprite-style export document with `frames` frames laid out in
/// a single row of `size`-pixel cells.
pub fn animation_json(image: &str, frames: usize, size: u32, duration_ms: u32) -> String {
    let entries: Vec<serde_json::Value> = (0..frames)
        .map(|i| {
            let x = i as u32 * size;
            serde_json::json!({
                "filename": format!("{} {}.aseprite", image, i),
                "frame": { "x": x, "y": 0, "w": size, "h": size },
                "rotated": false,
                "trimmed": false,
                "duration": duration_ms,
            })
        })
        .collect();

    let width = frames as u32 * size;
    serde_json::json!({
        "frames": entries,
        "meta": {
            "app": "https://www.aseprite.org/",
            "image": format!("{}.png", image),
            "size": { "w": width, "h": size },
        }
    })
    .to_string()
}

/// A temporary sprite tree on disk.
pub struct SpriteTreeFixture {
    pub root: TempDir,
}

impl SpriteTreeFixture {
    /// Create a new empty tree.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the tree root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a raw file at `relative`, creating parent directories.
    pub fn add_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write an animation document with `frames` 32x32 frames of 100 ms.
    pub fn add_animation(&self, relative: &str, frames: usize) -> PathBuf {
        let stem = Path::new(relative)
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .unwrap_or("sheet");
        self.add_file(relative, &animation_json(stem, frames, 32, 100))
    }

    /// Create an empty directory at `relative`.
    pub fn add_dir(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Relative paths of every file in the tree, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(self.root.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(self.root.path())
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();
        files
    }
}

impl Default for SpriteTreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_writes_nested_files() {
        let fixture = SpriteTreeFixture::new();
        fixture.add_animation("anim-walk.json", 4);
        fixture.add_animation("sub/anim-run.json", 2);
        fixture.add_dir("empty");

        assert_eq!(fixture.files(), vec!["anim-walk.json", "sub/anim-run.json"]);
    }

    #[test]
    fn test_animation_json_shape() {
        let json = animation_json("hero-idle", 3, 16, 80);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["frames"].as_array().unwrap().len(), 3);
        assert_eq!(value["frames"][2]["frame"]["x"], 32);
        assert_eq!(value["meta"]["image"], "hero-idle.png");
    }
}
