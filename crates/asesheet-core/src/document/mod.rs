//! Frame decoding for Aseprite JSON exports.
//!
//! A [`SpriteDocument`] holds the parsed JSON tree of one export. It only
//! lives long enough to extract frames: fields are decoded on demand, one at
//! a time, through the typed schema in [`schema`], so a missing `meta.image`
//! does not prevent frames from decoding and vice versa.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "frames": [ { "frame": { "x": 0, "y": 0, "w": 32, "h": 32 }, "duration": 100 } ],
//!   "meta": { "image": "hero-idle.png" }
//! }
//! ```

pub mod schema;

use serde_json::Value;
use std::path::Path;

use crate::error::{Result, SheetError};
use crate::frame::Frame;
use schema::{value_kind, FrameEntry, FrameRect, SheetMeta};

/// A parsed, untyped export document.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDocument {
    root: Value,
}

impl SpriteDocument {
    /// Wraps an already parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parses a document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let root = serde_json::from_slice(bytes).map_err(SheetError::invalid_json)?;
        Ok(Self { root })
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let root = serde_json::from_str(json).map_err(SheetError::invalid_json)?;
        Ok(Self { root })
    }

    fn entries(&self) -> Result<&[Value]> {
        match self.root.get("frames") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(other) => Err(SheetError::malformed_field(
                "frames",
                format!("expected an array, found {}", value_kind(other)),
            )),
            None => Err(SheetError::malformed_field("frames", "missing field `frames`")),
        }
    }

    /// Number of entries in `frames`.
    pub fn frame_count(&self) -> Result<usize> {
        self.entries().map(<[Value]>::len)
    }

    /// Decodes the frame at `index`.
    ///
    /// Returns `Ok(None)` when `index` is past the end of `frames`.
    pub fn frame_at(&self, index: usize) -> Result<Option<Frame>> {
        let entries = self.entries()?;
        let Some(raw) = entries.get(index) else {
            return Ok(None);
        };

        let at = format!("frames[{}]", index);
        let entry = FrameEntry::decode(raw, &at)?;

        let duration = entry.duration.ok_or_else(|| {
            SheetError::malformed_field(format!("{}.duration", at), "missing field `duration`")
        })?;
        if duration < 0.0 {
            return Err(SheetError::malformed_field(
                format!("{}.duration", at),
                format!("duration must be non-negative, got {}", duration),
            ));
        }

        let rect: FrameRect = entry.frame.ok_or_else(|| {
            SheetError::malformed_field(format!("{}.frame", at), "missing field `frame`")
        })?;
        let coord = |value: Option<f64>, name: &str| {
            value.map(|v| v as f32).ok_or_else(|| {
                SheetError::malformed_field(
                    format!("{}.frame.{}", at, name),
                    format!("missing field `{}`", name),
                )
            })
        };

        Ok(Some(Frame {
            duration_ms: duration,
            pos_x: coord(rect.x, "x")?,
            pos_y: coord(rect.y, "y")?,
            size_x: coord(rect.w, "w")?,
            size_y: coord(rect.h, "h")?,
        }))
    }

    /// Decodes every frame in array order.
    ///
    /// Fails on the first frame that does not decode; no partial sequence is
    /// returned.
    pub fn frames(&self) -> Result<Vec<Frame>> {
        let count = self.frame_count()?;
        let mut frames = Vec::with_capacity(count);
        for index in 0..count {
            if let Some(frame) = self.frame_at(index)? {
                frames.push(frame);
            }
        }
        Ok(frames)
    }

    /// Name of the source image (`meta.image`).
    pub fn image_name(&self) -> Result<String> {
        let meta = self
            .root
            .get("meta")
            .ok_or_else(|| SheetError::malformed_field("meta", "missing field `meta`"))?;
        SheetMeta::decode(meta, "meta")?
            .image
            .ok_or_else(|| SheetError::malformed_field("meta.image", "missing field `image`"))
    }
}

/// Reads and parses the document at `path` on the local filesystem.
pub fn decode_path(path: impl AsRef<Path>) -> Result<SpriteDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| SheetError::io(path, e))?;
    SpriteDocument::from_slice(&bytes).map_err(|e| e.with_path(path))
}

/// Number of entries in `doc.frames`.
pub fn frame_count(doc: &SpriteDocument) -> Result<usize> {
    doc.frame_count()
}

/// Frame at `index`, or `None` past the end.
pub fn frame_at(doc: &SpriteDocument, index: usize) -> Result<Option<Frame>> {
    doc.frame_at(index)
}

/// All frames in playback order.
pub fn all_frames(doc: &SpriteDocument) -> Result<Vec<Frame>> {
    doc.frames()
}

/// The referenced source image name.
pub fn image_name(doc: &SpriteDocument) -> Result<String> {
    doc.image_name()
}
