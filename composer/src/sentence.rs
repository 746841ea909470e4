//! The sentence sequence: the ordered tiles the user has composed.
//!
//! `Sentence` is the only place tiles are added, removed, or reordered. All
//! mutations go through four operations (`append`, `remove_at`, `replace_all`,
//! `clear`); resolver decisions are applied through [`Sentence::apply`], which
//! builds the complete next sequence and swaps it in with a single
//! `replace_all`, so no half-applied ordering is ever observable.
//!
//! Each effective mutation bumps `revision`. Hosts compare revisions to decide
//! when the strip and the speak affordance need to re-render.

#[cfg(test)]
#[path = "sentence_test.rs"]
mod sentence_test;

use crate::resolve::Mutation;
use crate::tile::Tile;

/// Ordered, index-addressed list of tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tiles: Vec<Tile>,
    revision: u64,
}

impl Sentence {
    /// Create an empty sentence at revision zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `tile` at the end. Always succeeds; duplicates are kept.
    pub fn append(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.bump();
    }

    /// Delete the tile at `index`, returning it.
    ///
    /// An out-of-range index is a caller bug: debug builds assert, release
    /// builds leave the sentence untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Tile> {
        debug_assert!(
            index < self.tiles.len(),
            "remove_at({index}) out of range for sentence of length {}",
            self.tiles.len()
        );
        if index >= self.tiles.len() {
            return None;
        }
        let removed = self.tiles.remove(index);
        self.bump();
        Some(removed)
    }

    /// Atomically replace the whole sequence.
    pub fn replace_all(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
        self.bump();
    }

    /// Empty the sentence. Returns `false` (and changes nothing) when it was
    /// already empty.
    pub fn clear(&mut self) -> bool {
        if self.tiles.is_empty() {
            return false;
        }
        self.tiles.clear();
        self.bump();
        true
    }

    /// Apply a resolver decision. Returns `true` if the sequence changed.
    pub fn apply(&mut self, mutation: &Mutation) -> bool {
        let Some(next) = self.preview(mutation) else {
            return false;
        };
        self.replace_all(next);
        true
    }

    /// The sequence `mutation` would produce, or `None` for a no-op.
    #[must_use]
    pub fn preview(&self, mutation: &Mutation) -> Option<Vec<Tile>> {
        match mutation {
            Mutation::None => None,
            Mutation::Singleton(tile) => Some(vec![tile.clone()]),
            Mutation::Append(tile) => {
                let mut next = self.tiles.clone();
                next.push(tile.clone());
                Some(next)
            }
            Mutation::InsertAt { index, tile } => {
                let mut next = self.tiles.clone();
                next.insert((*index).min(next.len()), tile.clone());
                Some(next)
            }
            Mutation::Move { from, to } => {
                let (from, to) = (*from, *to);
                if from == to || from >= self.tiles.len() || to >= self.tiles.len() {
                    return None;
                }
                let mut next = self.tiles.clone();
                let moved = next.remove(from);
                next.insert(to, moved);
                Some(next)
            }
        }
    }

    /// The words joined by single spaces, in order.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| tile.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Counter bumped by every effective mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
