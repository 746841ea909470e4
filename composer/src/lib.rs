//! Sentence-composition and drag-and-drop engine for the communication board.
//!
//! The crate owns every piece of state the board mutates: the ordered sentence
//! strip, the drag session that sits between `dragstart` and its terminating
//! event, the palette tiles a user can pick from, and the speech and upload
//! flags that gate the outward-facing affordances. It performs no I/O. A host
//! (browser shell, terminal shell, test) feeds it events and carries out the
//! [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::ComposerCore`], the single owner of composition state |
//! | [`sentence`] | The ordered sentence sequence and its mutation API |
//! | [`tile`] | The `{word, icon}` value type |
//! | [`payload`] | Drag data store model and the tagged drag payload codec |
//! | [`drag`] | Drag session state machine |
//! | [`resolve`] | Pure drop resolution into a sentence [`resolve::Mutation`] |
//! | [`layout`] | Slot geometry for the rendered strip |
//! | [`hit`] | Hit-testing a drop point against the slot layout |
//! | [`palette`] | Tile source registry (core, suggestions, detected) |
//! | [`symbols`] | Word to icon lookup with the unknown-icon fallback |
//! | [`analysis`] | Decoding of the image-analysis service response |
//! | [`speech`] | Speech trigger state and utterance lifecycle |
//! | [`upload`] | Image upload gate and failure reporting |
//! | [`error`] | Error and user notice types |
//! | [`consts`] | Shared constants (MIME keys, icon paths, opacities) |

pub mod analysis;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod error;
pub mod hit;
pub mod layout;
pub mod palette;
pub mod payload;
pub mod resolve;
pub mod sentence;
pub mod speech;
pub mod symbols;
pub mod tile;
pub mod upload;
