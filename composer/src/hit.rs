#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::layout::{Point, SlotLayout};

/// Where a drag event landed relative to the sentence strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The empty-sentence placeholder (the strip holds no tiles).
    Placeholder,
    /// The slot of the existing tile at this index.
    Slot(usize),
    /// The strip container, between or after tiles.
    Background,
    /// Anywhere outside the strip.
    Outside,
}

impl DropTarget {
    /// The slot index, for slot targets.
    #[must_use]
    pub fn slot(self) -> Option<usize> {
        match self {
            Self::Slot(index) => Some(index),
            _ => None,
        }
    }
}

/// Classify `pt` against the strip.
///
/// A slot hit always wins over the container, so a drop on a tile is handled
/// as a tile drop and never also as a background drop. Slots beyond
/// `sentence_len` (stale layout) are ignored.
#[must_use]
pub fn hit_test(pt: Point, layout: &SlotLayout, sentence_len: usize) -> DropTarget {
    if !layout.container().contains(pt) {
        return DropTarget::Outside;
    }
    if sentence_len == 0 {
        return DropTarget::Placeholder;
    }
    layout
        .slots()
        .iter()
        .take(sentence_len)
        .position(|rect| rect.contains(pt))
        .map_or(DropTarget::Background, DropTarget::Slot)
}
