//! Drag session state machine.
//!
//! A session exists only between a drag start and its terminating event. It
//! records where the dragged tile came from and which drop slot (if any) is
//! currently hovered:
//!
//! ```text
//! Idle ──start──▶ Dragging ──over slot──▶ HoveringSlot ──over other slot──▶ HoveringSlot
//!   ▲                │  ▲                      │
//!   │                │  └──────leave───────────┘
//!   └──── end (drop / dragend / cancel / window leave) from any state
//! ```
//!
//! Hover state is cosmetic. It never decides what a drop does; the resolver
//! reads only the provenance. Every terminating event goes through
//! [`DragState::end`], which returns the machine to `Idle` in one step.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::hit::DropTarget;
use crate::palette::PaletteSlot;
use crate::payload::DropEffect;

/// Where the dragged tile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// A palette tile; the tile is ghosted until the session ends.
    Palette(PaletteSlot),
    /// A tile already in the sentence, at this index.
    Sentence(usize),
    /// A drag that entered the strip without a start event we saw
    /// (another window, another component).
    Foreign,
}

impl Provenance {
    /// Whether the dragged tile is not yet part of the sentence.
    #[must_use]
    pub fn is_external(self) -> bool {
        !matches!(self, Self::Sentence(_))
    }

    /// The effect shown while hovering: copy for external tiles, move for reorders.
    #[must_use]
    pub fn drop_effect(self) -> DropEffect {
        if self.is_external() { DropEffect::Copy } else { DropEffect::Move }
    }
}

/// The active drag session, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress; no drop slot is hovered.
    Dragging { provenance: Provenance },
    /// A drag is hovering the slot of the tile at `index`.
    HoveringSlot { provenance: Provenance, index: usize },
    /// A drag is hovering the empty-sentence placeholder.
    HoveringPlaceholder { provenance: Provenance },
}

impl DragState {
    /// Start a session. Any previous session is replaced, so at most one is active.
    pub fn begin(&mut self, provenance: Provenance) {
        *self = Self::Dragging { provenance };
    }

    /// Record a dragover at `target`. A dragover with no session starts a
    /// [`Provenance::Foreign`] one. Returns `true` if the hover changed.
    pub fn hover(&mut self, target: DropTarget) -> bool {
        let provenance = self.provenance().unwrap_or(Provenance::Foreign);
        let next = match target {
            DropTarget::Slot(index) => Self::HoveringSlot { provenance, index },
            DropTarget::Placeholder => Self::HoveringPlaceholder { provenance },
            DropTarget::Background | DropTarget::Outside => Self::Dragging { provenance },
        };
        let changed = next.hover_index() != self.hover_index()
            || next.placeholder_hovered() != self.placeholder_hovered();
        *self = next;
        changed
    }

    /// Record a dragleave: the hovered slot or placeholder is released, the
    /// session stays active. Returns `true` if a highlight was cleared.
    pub fn leave(&mut self) -> bool {
        match *self {
            Self::HoveringSlot { provenance, .. } | Self::HoveringPlaceholder { provenance } => {
                *self = Self::Dragging { provenance };
                true
            }
            Self::Idle | Self::Dragging { .. } => false,
        }
    }

    /// Terminate the session. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn provenance(&self) -> Option<Provenance> {
        match *self {
            Self::Idle => None,
            Self::Dragging { provenance }
            | Self::HoveringSlot { provenance, .. }
            | Self::HoveringPlaceholder { provenance } => Some(provenance),
        }
    }

    /// Index of the sentence tile being dragged, for internal drags.
    #[must_use]
    pub fn dragged_index(&self) -> Option<usize> {
        match self.provenance() {
            Some(Provenance::Sentence(index)) => Some(index),
            _ => None,
        }
    }

    /// The palette tile being dragged, which renders ghosted.
    #[must_use]
    pub fn ghost(&self) -> Option<PaletteSlot> {
        match self.provenance() {
            Some(Provenance::Palette(slot)) => Some(slot),
            _ => None,
        }
    }

    /// Index of the hovered slot.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        match *self {
            Self::HoveringSlot { index, .. } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn placeholder_hovered(&self) -> bool {
        matches!(self, Self::HoveringPlaceholder { .. })
    }
}
