//! The flat animation catalog produced by a load.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Mapping from animation name to its frames in playback order.
///
/// Names are kept in discovery order. Entries from nested directories are
/// keyed by their `/`-joined relative path (e.g. `enemies/bat-fly`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spritesheet {
    animations: IndexMap<String, Vec<Frame>>,
}

impl Spritesheet {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Frames of the named animation.
    pub fn get(&self, name: &str) -> Option<&[Frame]> {
        self.animations.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Animation names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Iterates `(name, frames)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Frame])> {
        self.animations
            .iter()
            .map(|(name, frames)| (name.as_str(), frames.as_slice()))
    }

    /// Inserts an animation, replacing any previous entry with the same name.
    ///
    /// Returns the displaced frames. A replaced entry keeps its original
    /// position in the discovery order.
    pub fn insert(&mut self, name: impl Into<String>, frames: Vec<Frame>) -> Option<Vec<Frame>> {
        self.animations.insert(name.into(), frames)
    }

    /// Moves every entry of `other` into `self` under `prefix/<name>`.
    ///
    /// Returns the keys that replaced an existing entry.
    pub fn merge_prefixed(&mut self, prefix: &str, other: Spritesheet) -> Vec<String> {
        let mut replaced = Vec::new();
        for (name, frames) in other.animations {
            let key = format!("{}/{}", prefix, name);
            if self.animations.insert(key.clone(), frames).is_some() {
                replaced.push(key);
            }
        }
        replaced
    }

    /// Sum of the frame durations of an animation, in milliseconds.
    pub fn total_duration_ms(&self, name: &str) -> Option<f64> {
        self.get(name)
            .map(|frames| frames.iter().map(|f| f.duration_ms).sum())
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<Frame>> {
        self.animations
    }
}

impl<'a> IntoIterator for &'a Spritesheet {
    type Item = (&'a String, &'a Vec<Frame>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<Frame>>;

    fn into_iter(self) -> Self::IntoIter {
        self.animations.iter()
    }
}
