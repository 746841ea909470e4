//! Word to symbol-glyph lookup.
//!
//! Hosts load the map from whichever source is reachable (a local JSON file,
//! the backend's core-word endpoint) and fall back to [`SymbolMap::builtin`].
//! Lookups never fail: a word with no entry resolves to the unknown glyph.

#[cfg(test)]
#[path = "symbols_test.rs"]
mod symbols_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::consts::UNKNOWN_ICON;
use crate::tile::Tile;

/// The fixed core vocabulary, in palette order.
pub const CORE_WORDS: [&str; 43] = [
    "I", "YOU", "ME", //
    "GO", "STOP", "LOOK", "SEE", "OPEN", "CLOSE", "EAT", "DRINK", "HELP", "WANT", "NEED", "COME", "LIKE", "PLAY",
    "FEEL", //
    "MORE", "BIG", "LITTLE", "GOOD", "BAD", "HAPPY", "SAD", //
    "IN", "OUT", "UP", "DOWN", "ON", "OFF", //
    "WHAT", "WHERE", //
    "YES", "NO", "PLEASE", "THANK YOU", "ALL DONE", //
    "THIS", "THAT", //
    "NOT", "NOW", "HERE",
];

const BUILTIN: [(&str, &str); 43] = [
    ("I", "/acc/symbols/I.svg"),
    ("YOU", "/acc/symbols/you.svg"),
    ("ME", "/acc/symbols/me.svg"),
    ("GO", "/acc/symbols/go_,_to.svg"),
    ("STOP", "/acc/symbols/stop.svg"),
    ("LOOK", "/acc/symbols/look_,_to.svg"),
    ("SEE", "/acc/symbols/eyes.svg"),
    ("OPEN", "/acc/symbols/open.svg"),
    ("CLOSE", "/acc/symbols/close_,_to.svg"),
    ("EAT", "/acc/symbols/eat_,_to.svg"),
    ("DRINK", "/acc/symbols/drink.svg"),
    ("HELP", "/acc/symbols/help_,_to.svg"),
    ("WANT", "/acc/symbols/want_,_to.svg"),
    ("NEED", "/acc/symbols/need_toilet.svg"),
    ("COME", "/acc/symbols/come_,_to.svg"),
    ("LIKE", "/acc/symbols/like.svg"),
    ("PLAY", "/acc/symbols/play_,_to.svg"),
    ("FEEL", "/acc/symbols/feel.svg"),
    ("MORE", "/acc/symbols/more.svg"),
    ("BIG", "/acc/symbols/big_mac_switch.svg"),
    ("LITTLE", "/acc/symbols/little.svg"),
    ("GOOD", "/acc/symbols/good.svg"),
    ("BAD", "/acc/symbols/bad.svg"),
    ("HAPPY", "/acc/symbols/happy_lady.svg"),
    ("SAD", "/acc/symbols/sad_man.svg"),
    ("IN", "/acc/symbols/in.svg"),
    ("OUT", "/acc/symbols/out.svg"),
    ("UP", "/acc/symbols/up.svg"),
    ("DOWN", "/acc/symbols/down.svg"),
    ("ON", "/acc/symbols/on.svg"),
    ("OFF", "/acc/symbols/off.svg"),
    ("WHAT", "/acc/symbols/what.svg"),
    ("WHERE", "/acc/symbols/where_1.svg"),
    ("YES", "/acc/symbols/correct.svg"),
    ("NO", "/acc/symbols/mistake_no_wrong.svg"),
    ("PLEASE", "/acc/symbols/please.svg"),
    ("THANK YOU", "/acc/symbols/thank_you.svg"),
    ("ALL DONE", "/acc/symbols/finish.svg"),
    ("THIS", "/acc/symbols/pointed.svg"),
    ("THAT", "/acc/symbols/point_,_to.svg"),
    ("NOT", "/acc/symbols/not.svg"),
    ("NOW", "/acc/symbols/now.svg"),
    ("HERE", "/acc/symbols/here.svg"),
];

/// Body of the backend's core-word endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreWordsResponse {
    #[serde(default)]
    pub core_words: Vec<String>,
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

/// Mapping from vocabulary word to icon path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    icons: HashMap<String, String>,
}

impl SymbolMap {
    /// An empty map; every word resolves to the unknown glyph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the board, used when no other source loads.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN)
    }

    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let icons = pairs
            .into_iter()
            .map(|(word, icon)| (word.to_owned(), icon.to_owned()))
            .collect();
        Self { icons }
    }

    /// Parse a flat `{"WORD": "/icon.svg", ...}` object.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `raw` is not an object of strings.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let icons: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { icons })
    }

    /// Take the icon table out of a core-word endpoint response.
    #[must_use]
    pub fn from_response(response: CoreWordsResponse) -> Self {
        Self { icons: response.icons }
    }

    /// Icon for `word`, trying the exact key then its uppercase form.
    #[must_use]
    pub fn icon_for(&self, word: &str) -> &str {
        self.icons
            .get(word)
            .or_else(|| self.icons.get(&word.to_uppercase()))
            .map_or(UNKNOWN_ICON, String::as_str)
    }

    /// A tile for `word` with its resolved icon.
    #[must_use]
    pub fn tile(&self, word: &str) -> Tile {
        Tile::new(word, self.icon_for(word))
    }

    pub fn insert(&mut self, word: impl Into<String>, icon: impl Into<String>) {
        self.icons.insert(word.into(), icon.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
