//! Typed view of the fields the decoder reads from an export document.
//!
//! Each field is decoded on its own so that a missing or mistyped value is
//! reported with its full JSON path (`frames[2].frame.w`) instead of a
//! generic deserialization error for the enclosing object.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SheetError};

/// One element of the `frames` array.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEntry {
    pub frame: Option<FrameRect>,
    pub duration: Option<f64>,
}

/// Source rectangle of a frame (`frames[].frame`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
}

/// The `meta` object.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetMeta {
    pub image: Option<String>,
}

impl FrameEntry {
    /// Decodes the entry at JSON path `at` (e.g. `frames[0]`).
    pub fn decode(value: &Value, at: &str) -> Result<Self> {
        let frame = match member(value, "frame", at)? {
            Some(rect) => Some(FrameRect::decode(rect, &format!("{}.frame", at))?),
            None => None,
        };
        Ok(Self {
            frame,
            duration: field(value, "duration", at)?,
        })
    }
}

impl FrameRect {
    pub fn decode(value: &Value, at: &str) -> Result<Self> {
        Ok(Self {
            x: field(value, "x", at)?,
            y: field(value, "y", at)?,
            w: field(value, "w", at)?,
            h: field(value, "h", at)?,
        })
    }
}

impl SheetMeta {
    pub fn decode(value: &Value, at: &str) -> Result<Self> {
        Ok(Self {
            image: field(value, "image", at)?,
        })
    }
}

/// Looks up `name` in the object at `at`. `null` counts as absent.
fn member<'a>(value: &'a Value, name: &str, at: &str) -> Result<Option<&'a Value>> {
    let object = value.as_object().ok_or_else(|| {
        SheetError::malformed_field(
            at,
            format!("expected an object, found {}", value_kind(value)),
        )
    })?;
    Ok(object.get(name).filter(|v| !v.is_null()))
}

fn field<T: DeserializeOwned>(value: &Value, name: &str, at: &str) -> Result<Option<T>> {
    member(value, name, at)?
        .map(|raw| {
            T::deserialize(raw).map_err(|e| {
                SheetError::malformed_field(format!("{}.{}", at, name), e.to_string())
            })
        })
        .transpose()
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
