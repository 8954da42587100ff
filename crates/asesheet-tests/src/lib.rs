//! asesheet End-to-End Test Infrastructure
//!
//! Integration tests for catalog loading against real directory trees:
//!
//! - Decoding: checked-in documents under `testdata/`
//! - Loading: synthetic trees built with [`fixtures::SpriteTreeFixture`]
//! - Parity: the same tree through the filesystem and embedded providers
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p asesheet-tests
//! ```

pub mod fixtures;
