//! Tile source registry: the palettes a user picks tiles from.
//!
//! Three read-only lists feed the sentence. The core vocabulary is fixed; the
//! suggestion and detected-object lists are replaced wholesale each time an
//! image analysis succeeds. Palettes never mutate the sentence themselves.
//! They hand out tiles for taps and drag payloads for drags.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt;
use std::str::FromStr;

use crate::payload::DragPayload;
use crate::symbols::{CORE_WORDS, SymbolMap};
use crate::tile::Tile;

/// Which palette a tile lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// The fixed core vocabulary.
    Core,
    /// The suggested sentence from the last image analysis.
    Suggestions,
    /// Objects detected in the last analyzed image.
    Detected,
}

impl PaletteKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Suggestions => "suggested",
            Self::Detected => "detected",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized palette name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette `{0}` (expected core, suggested, or detected)")]
pub struct UnknownPalette(pub String);

impl FromStr for PaletteKind {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "suggested" | "suggestions" | "suggestion" => Ok(Self::Suggestions),
            "detected" | "seen" => Ok(Self::Detected),
            other => Err(UnknownPalette(other.to_owned())),
        }
    }
}

/// Address of one palette tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteSlot {
    pub kind: PaletteKind,
    pub index: usize,
}

impl PaletteSlot {
    #[must_use]
    pub fn new(kind: PaletteKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Build the core vocabulary with icons from `symbols`.
#[must_use]
pub fn core_vocabulary(symbols: &SymbolMap) -> Vec<Tile> {
    CORE_WORDS.iter().map(|word| symbols.tile(word)).collect()
}

/// The three tile sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palettes {
    core: Vec<Tile>,
    suggestions: Vec<Tile>,
    detected: Vec<Tile>,
}

impl Palettes {
    /// Core vocabulary from `symbols`, no suggestions or detections yet.
    #[must_use]
    pub fn new(symbols: &SymbolMap) -> Self {
        Self { core: core_vocabulary(symbols), ..Self::default() }
    }

    /// Re-resolve core icons after the symbol map changed.
    pub fn set_symbols(&mut self, symbols: &SymbolMap) {
        self.core = core_vocabulary(symbols);
    }

    pub fn set_suggestions(&mut self, tiles: Vec<Tile>) {
        self.suggestions = tiles;
    }

    pub fn set_detected(&mut self, tiles: Vec<Tile>) {
        self.detected = tiles;
    }

    #[must_use]
    pub fn tiles(&self, kind: PaletteKind) -> &[Tile] {
        match kind {
            PaletteKind::Core => &self.core,
            PaletteKind::Suggestions => &self.suggestions,
            PaletteKind::Detected => &self.detected,
        }
    }

    #[must_use]
    pub fn tile(&self, slot: PaletteSlot) -> Option<&Tile> {
        self.tiles(slot.kind).get(slot.index)
    }

    /// Index of the first tile in `kind` whose word matches, ignoring case.
    #[must_use]
    pub fn find(&self, kind: PaletteKind, word: &str) -> Option<usize> {
        self.tiles(kind)
            .iter()
            .position(|tile| tile.word.eq_ignore_ascii_case(word))
    }

    /// The external payload a drag of `slot` carries.
    #[must_use]
    pub fn drag_payload(&self, slot: PaletteSlot) -> Option<DragPayload> {
        self.tile(slot).cloned().map(DragPayload::External)
    }
}
