//! Speech trigger: the single speak/stop toggle and its utterance lifecycle.
//!
//! The trigger never synthesizes audio. It decides which [`SpeechCommand`]s
//! the host's speech capability must run and tracks the state the toggle
//! label reflects. At most one utterance is in flight: speaking again while
//! one is in flight emits `Cancel` before the new `Speak`.
//!
//! Each utterance carries an id. Lifecycle callbacks name the id they belong
//! to, so a late `end` from a cancelled utterance cannot flip the state of
//! the one that replaced it.

#[cfg(test)]
#[path = "speech_test.rs"]
mod speech_test;

use crate::consts::{SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME};
use crate::error::ComposeError;

/// Identifier of one utterance.
pub type UtteranceId = u64;

/// One request to the speech capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub rate: f64,
    pub pitch: f64,
    pub volume: f64,
}

/// What the host's speech capability must do.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCommand {
    /// Stop whatever is being spoken.
    Cancel,
    /// Start speaking.
    Speak(Utterance),
}

/// Lifecycle of the current utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechState {
    #[default]
    Idle,
    /// Requested; the capability has not reported `start` yet.
    Starting(UtteranceId),
    /// The capability reported `start`.
    Speaking(UtteranceId),
}

impl SpeechState {
    #[must_use]
    pub fn current(self) -> Option<UtteranceId> {
        match self {
            Self::Idle => None,
            Self::Starting(id) | Self::Speaking(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeechTrigger {
    state: SpeechState,
    available: bool,
    next_id: UtteranceId,
}

impl SpeechTrigger {
    #[must_use]
    pub fn new(available: bool) -> Self {
        Self { state: SpeechState::Idle, available, next_id: 1 }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn state(&self) -> SpeechState {
        self.state
    }

    /// Whether an utterance is requested or playing.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.state.current().is_some()
    }

    /// Label for the toggle affordance.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.in_flight() { "Stop" } else { "Speak" }
    }

    /// Speak `text`, cancelling any utterance in flight first.
    ///
    /// Blank text yields no commands.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::SpeechUnavailable`] without changing state when
    /// the environment has no speech capability.
    pub fn speak(&mut self, text: &str) -> Result<Vec<SpeechCommand>, ComposeError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        if !self.available {
            return Err(ComposeError::SpeechUnavailable);
        }
        let mut commands = Vec::with_capacity(2);
        if self.in_flight() {
            commands.push(SpeechCommand::Cancel);
        }
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.state = SpeechState::Starting(id);
        commands.push(SpeechCommand::Speak(Utterance {
            id,
            text: text.to_owned(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }));
        Ok(commands)
    }

    /// Stop the utterance in flight, if any.
    pub fn stop(&mut self) -> Vec<SpeechCommand> {
        if !self.in_flight() {
            return Vec::new();
        }
        self.state = SpeechState::Idle;
        vec![SpeechCommand::Cancel]
    }

    /// The toggle affordance: stop when in flight, speak otherwise.
    ///
    /// # Errors
    ///
    /// See [`SpeechTrigger::speak`].
    pub fn toggle(&mut self, text: &str) -> Result<Vec<SpeechCommand>, ComposeError> {
        if self.in_flight() {
            return Ok(self.stop());
        }
        self.speak(text)
    }

    /// The capability started `id`. Returns `true` if the state changed.
    pub fn on_start(&mut self, id: UtteranceId) -> bool {
        if self.state == SpeechState::Starting(id) {
            self.state = SpeechState::Speaking(id);
            return true;
        }
        false
    }

    /// The capability finished `id`. Returns `true` if the state changed.
    pub fn on_end(&mut self, id: UtteranceId) -> bool {
        self.settle(id)
    }

    /// The capability failed `id`. Returns `true` if the state changed.
    pub fn on_error(&mut self, id: UtteranceId) -> bool {
        self.settle(id)
    }

    fn settle(&mut self, id: UtteranceId) -> bool {
        if self.state.current() == Some(id) {
            self.state = SpeechState::Idle;
            return true;
        }
        false
    }
}
