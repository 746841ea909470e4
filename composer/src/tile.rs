//! The `{word, icon}` value that every palette and the sentence strip hold.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use serde::{Deserialize, Serialize};

use crate::consts::UNKNOWN_ICON;

/// One vocabulary unit: a display label and the path of its symbol glyph.
///
/// Tiles compare by value. The same word may appear in a sentence more than
/// once, so a tile carries no identity beyond its two fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Display label, uppercase by convention (e.g. `"GO"`, `"THANK YOU"`).
    pub word: String,
    /// Resource path of the symbol glyph.
    pub icon: String,
}

impl Tile {
    #[must_use]
    pub fn new(word: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { word: word.into(), icon: icon.into() }
    }

    /// A tile whose glyph is the unknown-symbol placeholder.
    #[must_use]
    pub fn unknown(word: impl Into<String>) -> Self {
        Self::new(word, UNKNOWN_ICON)
    }

    /// Whether the word is non-empty once surrounding whitespace is dropped.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.word.trim().is_empty()
    }
}
