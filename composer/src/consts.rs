//! Shared constants for the composer crate.

// ── Icons ───────────────────────────────────────────────────────

/// Placeholder glyph for words with no mapped symbol.
pub const UNKNOWN_ICON: &str = "/acc/unknown.svg";

// ── Drag data ───────────────────────────────────────────────────

/// Transfer key for the structured `{word, icon}` record.
pub const MIME_JSON: &str = "application/json";

/// Transfer key for the plain-text fallback (word, or origin index).
pub const MIME_TEXT: &str = "text/plain";

// ── Visual feedback ─────────────────────────────────────────────

/// Opacity of a tile while it is the source of an active drag.
pub const DRAGGED_OPACITY: f64 = 0.5;

/// Opacity of a tile at rest.
pub const RESTING_OPACITY: f64 = 1.0;

// ── Speech ──────────────────────────────────────────────────────

/// Speaking rate, slightly slower than default for clarity.
pub const SPEECH_RATE: f64 = 0.9;

/// Speaking pitch.
pub const SPEECH_PITCH: f64 = 1.0;

/// Speaking volume.
pub const SPEECH_VOLUME: f64 = 1.0;

// ── Strip layout ────────────────────────────────────────────────

/// Default slot width in CSS pixels.
pub const SLOT_WIDTH_PX: f64 = 120.0;

/// Default slot height in CSS pixels.
pub const SLOT_HEIGHT_PX: f64 = 140.0;

/// Default gap between adjacent slots in CSS pixels.
pub const SLOT_GAP_PX: f64 = 15.0;
