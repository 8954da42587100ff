//! Inspect command implementation
//!
//! Decodes a single export document and prints its image and frames.

use anyhow::{Context, Result};
use asesheet_core::{decode_path, Frame};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// Decoded view of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectOutput {
    pub path: String,
    pub image: Option<String>,
    pub frame_count: usize,
    pub frames: Vec<Frame>,
}

/// Decodes the document at `path`.
///
/// A missing `meta.image` is logged and reported as `None`; any frame
/// failure is an error.
pub fn inspect(path: &Path) -> Result<InspectOutput> {
    let doc = decode_path(path)?;
    let frames = doc
        .frames()
        .with_context(|| format!("failed to decode frames of '{}'", path.display()))?;
    let image = match doc.image_name() {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("{}: {}", path.display(), e);
            None
        }
    };

    Ok(InspectOutput {
        path: path.display().to_string(),
        image,
        frame_count: frames.len(),
        frames,
    })
}

/// Run the inspect command
///
/// # Arguments
/// * `file` - Path to the JSON export
/// * `json` - Whether to print machine-readable JSON instead of text
///
/// # Returns
/// Exit code: 0 on success
pub fn run(file: &str, json: bool) -> Result<ExitCode> {
    let output = inspect(Path::new(file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".bold(), output.path);
    match &output.image {
        Some(image) => println!("{} {}", "Image:".bold(), image),
        None => println!(
            "{} {}",
            "warning:".yellow().bold(),
            "document has no meta.image"
        ),
    }
    println!("{} {}", "Frames:".bold(), output.frame_count);
    for (i, frame) in output.frames.iter().enumerate() {
        println!(
            "  [{:>3}] x={:<6} y={:<6} w={:<6} h={:<6} {}",
            i,
            frame.pos_x,
            frame.pos_y,
            frame.size_x,
            frame.size_y,
            format!("{} ms", frame.duration_ms).dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asesheet_core::{ErrorKind, SheetError};
    use pretty_assertions::assert_eq;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn inspect_valid_document() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            "hero-idle.json",
            r#"{
                "frames": [
                    { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 }, "duration": 100 },
                    { "frame": { "x": 16, "y": 0, "w": 16, "h": 16 }, "duration": 200 }
                ],
                "meta": { "image": "hero-idle.png" }
            }"#,
        );

        let output = inspect(&path).unwrap();
        assert_eq!(output.image.as_deref(), Some("hero-idle.png"));
        assert_eq!(output.frame_count, 2);
        assert_eq!(output.frames[1], Frame::new(200.0, 16.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn inspect_without_image_still_decodes_frames() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            "hero-idle.json",
            r#"{ "frames": [ { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 }, "duration": 100 } ] }"#,
        );

        let output = inspect(&path).unwrap();
        assert_eq!(output.image, None);
        assert_eq!(output.frame_count, 1);
    }

    #[test]
    fn inspect_invalid_json_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "hero-idle.json", "{ nope");

        let err = inspect(&path).unwrap_err();
        let sheet_err = err.downcast_ref::<SheetError>().unwrap();
        assert_eq!(sheet_err.kind(), ErrorKind::MalformedDocument);
    }

    #[test]
    fn run_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.json");
        assert!(run(path.to_str().unwrap(), false).is_err());
    }
}
