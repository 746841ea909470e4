//! Image-analysis service response and its conversion into palette tiles.
//!
//! The service is opaque; only the JSON shape matters:
//!
//! ```json
//! {
//!   "detected": ["DOG"],
//!   "detectedTiles": [{"word": "DOG", "icon": "/acc/dog.svg"}],
//!   "suggested_words": ["I", "SEE", "DOG"],
//!   "icons": ["/acc/I.svg", "/acc/see.svg", "/acc/dog.svg"],
//!   "sentence": "I see dog"
//! }
//! ```
//!
//! `detectedTiles` is optional and preferred. Older responses only carry
//! `detected`, whose icons are recovered by matching against
//! `suggested_words`.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use serde::{Deserialize, Serialize};

use crate::consts::UNKNOWN_ICON;
use crate::tile::Tile;

/// Decoded analysis result. Every field defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub detected: Vec<String>,
    #[serde(default, rename = "detectedTiles", skip_serializing_if = "Option::is_none")]
    pub detected_tiles: Option<Vec<Tile>>,
    #[serde(default)]
    pub suggested_words: Vec<String>,
    #[serde(default)]
    pub icons: Vec<String>,
    #[serde(default)]
    pub sentence: String,
}

impl AnalysisResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not an analysis object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Tiles for the detected-objects palette.
    #[must_use]
    pub fn detected_tiles(&self) -> Vec<Tile> {
        if let Some(tiles) = self.detected_tiles.as_ref().filter(|tiles| !tiles.is_empty()) {
            return tiles.clone();
        }
        self.detected
            .iter()
            .map(|word| {
                let icon = self
                    .suggested_words
                    .iter()
                    .position(|suggested| suggested == word)
                    .map_or(UNKNOWN_ICON, |i| self.icon_at(i));
                Tile::new(word.clone(), icon)
            })
            .collect()
    }

    /// Tiles for the suggestions palette, in suggestion order.
    #[must_use]
    pub fn suggested_tiles(&self) -> Vec<Tile> {
        self.suggested_words
            .iter()
            .enumerate()
            .map(|(i, word)| Tile::new(word.clone(), self.icon_at(i)))
            .collect()
    }

    fn icon_at(&self, index: usize) -> &str {
        self.icons
            .get(index)
            .map(String::as_str)
            .filter(|icon| !icon.is_empty())
            .unwrap_or(UNKNOWN_ICON)
    }
}
