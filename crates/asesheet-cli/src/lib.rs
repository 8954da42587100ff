//! asesheet CLI library.
//!
//! This crate provides the command implementations behind the `asesheet`
//! binary and the sprite tree embedded at build time.

pub mod commands;
pub mod embedded;
pub mod input;
