//! Drop resolution: turning one drop event into at most one sentence mutation.
//!
//! The rule is read in precedence order:
//!
//! 1. A structured `{word, icon}` payload is an insertion, whatever the session
//!    says about a dragged index:
//!    - on the empty-sentence placeholder the sentence becomes `[tile]`;
//!    - on an existing tile's slot the tile is inserted before it;
//!    - on the strip background the tile is appended.
//! 2. Otherwise the drop is an internal reorder of the session's dragged tile
//!    to the slot dropped on. Dropping a tile on its own slot, or lacking
//!    either index, is a no-op.
//!
//! The slot-versus-background split of rule 1 is kept as two separate
//! branches (insert-before versus append) rather than folded into one.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use crate::hit::DropTarget;
use crate::payload::DragPayload;
use crate::tile::Tile;

/// A sentence change decided by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Leave the sentence as it is.
    None,
    /// Replace the (empty) sentence with exactly this tile.
    Singleton(Tile),
    /// Insert before the tile currently at `index`.
    InsertAt { index: usize, tile: Tile },
    /// Add at the end.
    Append(Tile),
    /// Remove the tile at `from` and reinsert it at `to`.
    Move { from: usize, to: usize },
}

impl Mutation {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Decide what a drop does.
///
/// `dragged_index` is the session's internal origin, if the session is an
/// internal drag. `sentence_len` guards against a placeholder target reported
/// for a sentence that is no longer empty; such a drop appends instead of
/// discarding the sentence.
#[must_use]
pub fn resolve(
    target: DropTarget,
    payload: Option<&DragPayload>,
    dragged_index: Option<usize>,
    sentence_len: usize,
) -> Mutation {
    if let Some(DragPayload::External(tile)) = payload {
        return resolve_external(target, tile, sentence_len);
    }
    resolve_internal(target, dragged_index)
}

fn resolve_external(target: DropTarget, tile: &Tile, sentence_len: usize) -> Mutation {
    match target {
        DropTarget::Placeholder if sentence_len == 0 => Mutation::Singleton(tile.clone()),
        DropTarget::Placeholder | DropTarget::Background => Mutation::Append(tile.clone()),
        DropTarget::Slot(index) => Mutation::InsertAt { index, tile: tile.clone() },
        DropTarget::Outside => Mutation::None,
    }
}

fn resolve_internal(target: DropTarget, dragged_index: Option<usize>) -> Mutation {
    let (Some(from), Some(to)) = (dragged_index, target.slot()) else {
        return Mutation::None;
    };
    if from == to {
        return Mutation::None;
    }
    Mutation::Move { from, to }
}
