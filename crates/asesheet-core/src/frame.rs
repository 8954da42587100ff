//! Frame type: one playback cell of an animation.

use serde::{Deserialize, Serialize};

/// A source-image rectangle plus its display duration.
///
/// Geometry is stored as `f32` (pixel-grid coordinates), the duration keeps
/// full `f64` precision in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Display duration in milliseconds.
    pub duration_ms: f64,
    /// Left edge of the rectangle within the source image.
    pub pos_x: f32,
    /// Top edge of the rectangle within the source image.
    pub pos_y: f32,
    /// Rectangle width in pixels.
    pub size_x: f32,
    /// Rectangle height in pixels.
    pub size_y: f32,
}

impl Frame {
    /// Creates a new frame.
    pub fn new(duration_ms: f64, pos_x: f32, pos_y: f32, size_x: f32, size_y: f32) -> Self {
        Self {
            duration_ms,
            pos_x,
            pos_y,
            size_x,
            size_y,
        }
    }

    /// Returns the rectangle as `[x, y, w, h]`.
    pub fn rect(&self) -> [f32; 4] {
        [self.pos_x, self.pos_y, self.size_x, self.size_y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let frame = Frame::new(100.0, 32.0, 0.0, 32.0, 16.0);
        let value = serde_json::to_value(frame).unwrap();
        assert_eq!(value["duration_ms"], 100.0);
        assert_eq!(value["pos_x"], 32.0);
        assert_eq!(value["pos_y"], 0.0);
        assert_eq!(value["size_x"], 32.0);
        assert_eq!(value["size_y"], 16.0);
    }

    #[test]
    fn test_rect() {
        let frame = Frame::new(50.0, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(frame.rect(), [1.0, 2.0, 3.0, 4.0]);
    }
}
