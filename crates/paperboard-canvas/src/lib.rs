//! # Paperboard Canvas
//!
//! The layer transform & interaction engine. This crate owns the data
//! model for transformable content layers and everything that mutates it:
//!
//! - **Model**: [`Layer`] - a positioned, sized, rotated content object
//!   with a fixed content kind (text, image, or video)
//! - **LayerStore**: authoritative id -> layer mapping plus the monotonic
//!   id and z counters; every mutation passes through it
//! - **GeometryEngine**: pure math in [`geometry`] - move, rotation-aware
//!   resize anchoring, and rotation from pointer sweeps
//! - **InteractionController**: the gesture state machine turning pointer
//!   events into geometry calls and store commits
//! - **SelectionManager** / **ClipboardManager**: selection + edit state
//!   and snapshot-copy with chained-offset paste
//! - **CanvasState**: facade wiring the pieces together and exposing the
//!   pointer/keyboard event surface
//!
//! ## Architecture
//!
//! ```text
//! pointer/keyboard events
//!   └── CanvasState
//!         ├── InteractionController ── geometry (pure compute)
//!         ├── ClipboardManager
//!         └── SelectionManager
//!               └── LayerStore (single writer of layer state)
//! ```
//!
//! Presentation collaborators re-read layer state (`layers_by_z`) to
//! render; they never hold layer references across gestures.

pub mod canvas;
pub mod clipboard;
pub mod geometry;
pub mod import;
pub mod interaction;
pub mod layer_store;
pub mod model;
pub mod selection;

pub use canvas::{CanvasState, Key, KeyInput};
pub use clipboard::ClipboardManager;
pub use geometry::{DragSnapshot, Handle, ResizeResult, ResizeSnapshot, RotateSnapshot};
pub use interaction::{InteractionController, Session};
pub use layer_store::{LayerPatch, LayerStore};
pub use model::{ContentKind, Layer, LayerContent, LayerDraft, LayerId, StyleMap};
pub use selection::SelectionManager;
