//! Composition engine: the single owner of board state.
//!
//! `ComposerCore` takes host events (taps, drag events, speech callbacks,
//! upload outcomes) and returns the [`Action`]s the host must carry out. It
//! never talks to a speaker, a network, or a screen. Every sentence change
//! goes through [`Sentence`], so a host re-renders only on
//! [`Action::SentenceChanged`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::analysis::AnalysisResponse;
use crate::consts::{DRAGGED_OPACITY, RESTING_OPACITY};
use crate::drag::{DragState, Provenance};
use crate::error::{ComposeError, UploadFailure};
use crate::hit::DropTarget;
use crate::palette::{PaletteKind, PaletteSlot, Palettes};
use crate::payload::{DragPayload, DropEffect, TransferData};
use crate::resolve::resolve;
use crate::sentence::Sentence;
use crate::speech::{SpeechCommand, SpeechTrigger, UtteranceId};
use crate::symbols::SymbolMap;
use crate::upload::UploadGate;

/// Side effects the host performs after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The sentence sequence changed; re-render the strip.
    SentenceChanged,
    /// Hover or ghost highlighting changed.
    HighlightChanged,
    /// Palette contents changed (symbols reloaded or a new analysis).
    PalettesChanged,
    /// Run a command on the speech capability.
    Speech(SpeechCommand),
    /// Show a message to the user.
    Notify(ComposeError),
}

/// Core engine state.
#[derive(Debug, Clone)]
pub struct ComposerCore {
    sentence: Sentence,
    palettes: Palettes,
    symbols: SymbolMap,
    drag: DragState,
    speech: SpeechTrigger,
    upload: UploadGate,
    last_drop_seq: Option<u64>,
}

impl Default for ComposerCore {
    fn default() -> Self {
        Self::new(SymbolMap::builtin(), false)
    }
}

impl ComposerCore {
    #[must_use]
    pub fn new(symbols: SymbolMap, speech_available: bool) -> Self {
        Self {
            sentence: Sentence::new(),
            palettes: Palettes::new(&symbols),
            symbols,
            drag: DragState::default(),
            speech: SpeechTrigger::new(speech_available),
            upload: UploadGate::new(),
            last_drop_seq: None,
        }
    }

    // ── Vocabulary ──────────────────────────────────────────────

    /// Swap in a new symbol map and re-resolve the core palette.
    pub fn set_symbols(&mut self, symbols: SymbolMap) -> Vec<Action> {
        self.palettes.set_symbols(&symbols);
        self.symbols = symbols;
        vec![Action::PalettesChanged]
    }

    /// Fill the suggestion and detected palettes from an analysis.
    pub fn apply_analysis(&mut self, response: &AnalysisResponse) -> Vec<Action> {
        self.palettes.set_detected(response.detected_tiles());
        self.palettes.set_suggestions(response.suggested_tiles());
        vec![Action::PalettesChanged]
    }

    // ── Sentence editing ────────────────────────────────────────

    /// Append the tapped palette tile.
    pub fn tap(&mut self, slot: PaletteSlot) -> Vec<Action> {
        let Some(tile) = self.palettes.tile(slot).cloned() else {
            return Vec::new();
        };
        self.sentence.append(tile);
        vec![Action::SentenceChanged]
    }

    /// Remove the sentence tile at `index`. Out-of-range indices are ignored.
    ///
    /// An internal drag in progress is ended, since its origin index would no
    /// longer name the same tile.
    pub fn remove(&mut self, index: usize) -> Vec<Action> {
        if index >= self.sentence.len() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.drag.dragged_index().is_some() {
            actions.extend(self.end_session());
        }
        if self.sentence.remove_at(index).is_some() {
            actions.push(Action::SentenceChanged);
        }
        actions
    }

    pub fn clear(&mut self) -> Vec<Action> {
        if !self.sentence.clear() {
            return Vec::new();
        }
        let mut actions = self.end_session();
        actions.push(Action::SentenceChanged);
        actions
    }

    /// Replace the sentence with the suggested tiles. No-op without suggestions.
    pub fn use_suggestions(&mut self) -> Vec<Action> {
        let suggestions = self.palettes.tiles(PaletteKind::Suggestions);
        if suggestions.is_empty() {
            return Vec::new();
        }
        let tiles = suggestions.to_vec();
        let mut actions = self.end_session();
        self.sentence.replace_all(tiles);
        actions.push(Action::SentenceChanged);
        actions
    }

    // ── Drag and drop ───────────────────────────────────────────

    /// Start dragging a palette tile. Returns the data to put on the drag.
    pub fn palette_drag_start(&mut self, slot: PaletteSlot) -> Option<TransferData> {
        let payload = self.palettes.drag_payload(slot)?;
        self.drag.begin(Provenance::Palette(slot));
        Some(payload.encode())
    }

    /// Start dragging the sentence tile at `index`.
    pub fn sentence_drag_start(&mut self, index: usize) -> Option<TransferData> {
        if index >= self.sentence.len() {
            return None;
        }
        self.drag.begin(Provenance::Sentence(index));
        Some(DragPayload::Internal(index).encode())
    }

    /// A dragover at `target`.
    pub fn drag_over(&mut self, target: DropTarget) -> Vec<Action> {
        if self.drag.hover(target) {
            vec![Action::HighlightChanged]
        } else {
            Vec::new()
        }
    }

    /// The pointer left the hovered slot or placeholder.
    pub fn drag_leave(&mut self) -> Vec<Action> {
        if self.drag.leave() {
            vec![Action::HighlightChanged]
        } else {
            Vec::new()
        }
    }

    /// The effect to show for the current session.
    #[must_use]
    pub fn drop_effect(&self) -> DropEffect {
        self.drag
            .provenance()
            .map_or(DropEffect::Copy, Provenance::drop_effect)
    }

    /// Resolve a drop at `target` carrying `data`.
    ///
    /// `seq` identifies the host event. A drop whose `seq` is not greater than
    /// the last one handled is a repeat delivery and does nothing, so one event
    /// never yields two mutations. The session ends whether or not the sentence
    /// changed.
    pub fn drop(&mut self, seq: u64, target: DropTarget, data: &TransferData) -> Vec<Action> {
        if matches!(self.last_drop_seq, Some(last) if seq <= last) {
            return Vec::new();
        }
        self.last_drop_seq = Some(seq);

        let payload = DragPayload::decode(data);
        let mutation = resolve(
            target,
            payload.as_ref(),
            self.drag.dragged_index(),
            self.sentence.len(),
        );
        let changed = self.sentence.apply(&mutation);
        let mut actions = self.end_session();
        if changed {
            actions.push(Action::SentenceChanged);
        }
        actions
    }

    /// `dragend` on the source.
    pub fn drag_end(&mut self) -> Vec<Action> {
        self.end_session()
    }

    /// Escape, a drop outside any target, or the pointer leaving the window.
    pub fn drag_cancel(&mut self) -> Vec<Action> {
        self.end_session()
    }

    fn end_session(&mut self) -> Vec<Action> {
        if self.drag.end() {
            vec![Action::HighlightChanged]
        } else {
            Vec::new()
        }
    }

    // ── Speech ──────────────────────────────────────────────────

    /// Speak the sentence, restarting if already speaking.
    pub fn speak(&mut self) -> Vec<Action> {
        let text = self.sentence.spoken_text();
        Self::speech_actions(self.speech.speak(&text))
    }

    /// The speak/stop toggle.
    pub fn toggle_speech(&mut self) -> Vec<Action> {
        let text = self.sentence.spoken_text();
        Self::speech_actions(self.speech.toggle(&text))
    }

    pub fn stop_speech(&mut self) -> Vec<Action> {
        Self::speech_actions(Ok(self.speech.stop()))
    }

    pub fn on_speech_start(&mut self, id: UtteranceId) -> bool {
        self.speech.on_start(id)
    }

    pub fn on_speech_end(&mut self, id: UtteranceId) -> bool {
        self.speech.on_end(id)
    }

    pub fn on_speech_error(&mut self, id: UtteranceId) -> bool {
        self.speech.on_error(id)
    }

    fn speech_actions(result: Result<Vec<SpeechCommand>, ComposeError>) -> Vec<Action> {
        match result {
            Ok(commands) => commands.into_iter().map(Action::Speech).collect(),
            Err(err) => vec![Action::Notify(err)],
        }
    }

    // ── Upload ──────────────────────────────────────────────────

    /// Claim the upload gate before sending `file_name`.
    ///
    /// # Errors
    ///
    /// Returns the reason the upload must not be sent: a non-image type or an
    /// upload already pending.
    pub fn begin_upload(&mut self, file_name: &str, mime: &str) -> Result<(), ComposeError> {
        self.upload.begin(file_name, mime)
    }

    /// Release the upload gate and apply a successful analysis.
    pub fn finish_upload(&mut self, outcome: Result<AnalysisResponse, UploadFailure>) -> Vec<Action> {
        match self.upload.finish(outcome) {
            Ok(response) => self.apply_analysis(&response),
            Err(err) => vec![Action::Notify(err)],
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    #[must_use]
    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    #[must_use]
    pub fn palettes(&self) -> &Palettes {
        &self.palettes
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolMap {
        &self.symbols
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn speech(&self) -> &SpeechTrigger {
        &self.speech
    }

    #[must_use]
    pub fn upload(&self) -> &UploadGate {
        &self.upload
    }

    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.sentence.is_empty()
    }

    #[must_use]
    pub fn can_use_suggestions(&self) -> bool {
        !self.palettes.tiles(PaletteKind::Suggestions).is_empty()
    }

    #[must_use]
    pub fn can_speak(&self) -> bool {
        !self.sentence.is_empty()
    }

    #[must_use]
    pub fn speak_label(&self) -> &'static str {
        self.speech.label()
    }

    /// Opacity of the sentence tile at `index`.
    #[must_use]
    pub fn slot_opacity(&self, index: usize) -> f64 {
        if self.drag.dragged_index() == Some(index) { DRAGGED_OPACITY } else { RESTING_OPACITY }
    }

    /// Opacity of a palette tile; the dragged one is ghosted.
    #[must_use]
    pub fn palette_opacity(&self, slot: PaletteSlot) -> f64 {
        if self.drag.ghost() == Some(slot) { DRAGGED_OPACITY } else { RESTING_OPACITY }
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.drag.hover_index()
    }

    #[must_use]
    pub fn placeholder_highlighted(&self) -> bool {
        self.drag.placeholder_hovered()
    }
}
