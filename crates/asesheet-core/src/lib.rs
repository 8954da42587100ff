//! Aseprite sprite-sheet catalog library
//!
//! This crate decodes the JSON metadata Aseprite writes next to an exported
//! sprite sheet and assembles a flat catalog mapping animation names to
//! their frames (source rectangle plus display duration).
//!
//! # Example
//!
//! ```
//! use asesheet_core::{Frame, SpriteDocument};
//!
//! let doc = SpriteDocument::from_json(r#"{
//!     "frames": [ { "frame": { "x": 32, "y": 0, "w": 32, "h": 32 }, "duration": 100 } ],
//!     "meta": { "image": "ball-bounce.png" }
//! }"#).unwrap();
//!
//! assert_eq!(doc.frame_count().unwrap(), 1);
//! assert_eq!(doc.frame_at(0).unwrap(), Some(Frame::new(100.0, 32.0, 0.0, 32.0, 32.0)));
//! assert_eq!(doc.frame_at(1).unwrap(), None);
//! assert_eq!(doc.image_name().unwrap(), "ball-bounce.png");
//! ```
//!
//! Loading a whole directory tree:
//!
//! ```no_run
//! use asesheet_core::load_spritesheet_from_dir;
//!
//! let sheet = load_spritesheet_from_dir("assets/sprites").unwrap();
//! for (name, frames) in sheet.iter() {
//!     println!("{}: {} frames", name, frames.len());
//! }
//! ```
//!
//! # Modules
//!
//! - [`document`]: Parsed export documents and the frame decoder
//! - [`error`]: Error types
//! - [`frame`]: The frame type
//! - [`loader`]: Directory walking and catalog assembly
//! - [`source`]: Filesystem and embedded source trees
//! - [`spritesheet`]: The catalog type

pub mod document;
pub mod error;
pub mod frame;
pub mod loader;
pub mod source;
pub mod spritesheet;

// Re-export commonly used types at the crate root
pub use document::{
    all_frames, decode_path, frame_at, frame_count, image_name, SpriteDocument,
};
pub use error::{ErrorKind, Result, SheetError};
pub use frame::Frame;
pub use loader::{
    animation_key, is_animation_source, load_spritesheet, load_spritesheet_embedded,
    load_spritesheet_from_dir,
};
pub use source::{
    EmbeddedDir, EmbeddedEntry, EmbeddedFile, EmbeddedTree, OsTree, SourceEntry, SourceTree,
};
pub use spritesheet::Spritesheet;
