//! Drag payload protocol: what a drag carries from its source to its drop.
//!
//! Two provenances travel through the same untyped drag data store:
//!
//! - **external** (palette tile, not yet in the sentence): the structured record
//!   `{"word": .., "icon": ..}` under `application/json`, plus the bare word
//!   under `text/plain` for consumers that only read plain text;
//! - **internal** (tile already in the sentence): the origin index as a decimal
//!   string under `text/plain` only.
//!
//! [`TransferData`] models the store. [`DragPayload`] is the typed view of it,
//! decoded exactly once when a drop arrives. A structured entry that does not
//! parse is treated as absent, so the drop falls through to the reorder path.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::collections::BTreeMap;

use crate::consts::{MIME_JSON, MIME_TEXT};
use crate::tile::Tile;

/// Effect a drag source permits, mirrored back as the drop effect on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// The tile is copied (palette sources keep their tile).
    #[default]
    Copy,
    /// The tile is moved (sentence tiles change position).
    Move,
}

impl DropEffect {
    /// The name a drag data store uses for this effect.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }
}

/// String entries keyed by MIME type, plus the allowed effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferData {
    entries: BTreeMap<String, String>,
    effect_allowed: DropEffect,
}

impl TransferData {
    /// An empty store permitting `effect`.
    #[must_use]
    pub fn new(effect_allowed: DropEffect) -> Self {
        Self { entries: BTreeMap::new(), effect_allowed }
    }

    /// Store `value` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(format.into(), value.into());
    }

    /// The value under `format`. Empty values read as absent.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .get(format)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Formats present in the store, in key order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }
}

/// Why a structured entry could not be read. Never surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("structured payload is not a word/icon record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("structured payload has a blank word")]
    BlankWord,
}

/// Typed drag payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A tile from outside the sentence.
    External(Tile),
    /// The origin index of a tile already in the sentence.
    Internal(usize),
}

impl DragPayload {
    /// Serialize into a drag data store.
    #[must_use]
    pub fn encode(&self) -> TransferData {
        match self {
            Self::External(tile) => {
                let mut data = TransferData::new(DropEffect::Copy);
                let record = serde_json::json!({ "word": tile.word, "icon": tile.icon });
                data.set_data(MIME_JSON, record.to_string());
                data.set_data(MIME_TEXT, tile.word.clone());
                data
            }
            Self::Internal(index) => {
                let mut data = TransferData::new(DropEffect::Move);
                data.set_data(MIME_TEXT, index.to_string());
                data
            }
        }
    }

    /// Read a drag data store.
    ///
    /// The structured entry wins when it parses. Otherwise a decimal
    /// `text/plain` value is an internal origin index. Anything else (no
    /// entries, a malformed record with a plain word) yields `None`.
    #[must_use]
    pub fn decode(data: &TransferData) -> Option<Self> {
        if let Some(raw) = data.get_data(MIME_JSON) {
            match parse_structured(raw) {
                Ok(tile) => return Some(Self::External(tile)),
                Err(_malformed) => {}
            }
        }
        let text = data.get_data(MIME_TEXT)?;
        match text.trim().parse::<usize>() {
            Ok(index) => Some(Self::Internal(index)),
            Err(_not_an_index) => None,
        }
    }

    /// The tile of an external payload.
    #[must_use]
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            Self::External(tile) => Some(tile),
            Self::Internal(_) => None,
        }
    }
}

/// Parse the `application/json` entry into a tile.
///
/// # Errors
///
/// Returns [`PayloadError::Json`] when the text is not a `{word, icon}` object
/// and [`PayloadError::BlankWord`] when the word is empty.
pub fn parse_structured(raw: &str) -> Result<Tile, PayloadError> {
    let tile: Tile = serde_json::from_str(raw)?;
    if !tile.is_valid() {
        return Err(PayloadError::BlankWord);
    }
    Ok(tile)
}
