//! Gesture state machine: turns raw pointer events into geometry updates.
//!
//! At most one session is active at a time. A start request claims the
//! session atomically; any further start request for the same press is
//! rejected rather than queued, which makes the handle-over-body event
//! gating explicit: a resize or rotate grip claims the session before the
//! layer body's drag-start can be accepted.
//!
//! The session holds only a start snapshot, never a layer reference.
//! Every pointer move recomputes geometry from that snapshot plus the
//! total displacement since the gesture began, then commits the result
//! through the store.

use paperboard_core::Point;

use crate::geometry::{self, DragSnapshot, Handle, ResizeSnapshot, RotateSnapshot};
use crate::layer_store::{LayerPatch, LayerStore};
use crate::model::LayerId;
use crate::selection::SelectionManager;

/// The transient state of one active gesture, replaced wholesale on every
/// transition and discarded on completion or cancellation.
#[derive(Debug, Clone, Copy)]
pub enum Session {
    Drag {
        id: LayerId,
        snapshot: DragSnapshot,
    },
    Resize {
        id: LayerId,
        handle: Handle,
        snapshot: ResizeSnapshot,
    },
    Rotate {
        id: LayerId,
        snapshot: RotateSnapshot,
    },
}

impl Session {
    /// The layer this session is manipulating.
    pub fn layer_id(&self) -> LayerId {
        match self {
            Session::Drag { id, .. } | Session::Resize { id, .. } | Session::Rotate { id, .. } => {
                *id
            }
        }
    }
}

/// Pointer-driven gesture controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionController {
    session: Option<Session>,
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Returns whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Pointer press on a layer body. Claims a drag session unless one is
    /// already open or the layer is being content-edited. On success the
    /// layer is raised to the front and selected.
    pub fn begin_drag(
        &mut self,
        store: &mut LayerStore,
        selection: &mut SelectionManager,
        id: LayerId,
        pointer: Point,
    ) -> bool {
        if self.session.is_some() {
            tracing::debug!(%id, "drag start rejected: session already claimed");
            return false;
        }
        if selection.editing() == Some(id) {
            return false;
        }
        let Some(layer) = store.get(id) else {
            return false;
        };

        let snapshot = DragSnapshot::capture(layer, pointer);
        store.bring_to_front(id);
        selection.select(id);
        self.session = Some(Session::Drag { id, snapshot });
        true
    }

    /// Pointer press on a resize grip. Only available while the layer is
    /// selected; the grip claims the session before any body drag can.
    pub fn begin_resize(
        &mut self,
        store: &LayerStore,
        selection: &SelectionManager,
        id: LayerId,
        handle: Handle,
        pointer: Point,
    ) -> bool {
        if self.session.is_some() {
            tracing::debug!(%id, ?handle, "resize start rejected: session already claimed");
            return false;
        }
        if selection.selected() != Some(id) {
            return false;
        }
        let Some(layer) = store.get(id) else {
            return false;
        };

        let snapshot = ResizeSnapshot::capture(layer, pointer);
        self.session = Some(Session::Resize {
            id,
            handle,
            snapshot,
        });
        true
    }

    /// Pointer press on the rotate grip. The pivot and starting angle are
    /// frozen from the layer's current geometry.
    pub fn begin_rotate(
        &mut self,
        store: &LayerStore,
        selection: &SelectionManager,
        id: LayerId,
        pointer: Point,
    ) -> bool {
        if self.session.is_some() {
            tracing::debug!(%id, "rotate start rejected: session already claimed");
            return false;
        }
        if selection.selected() != Some(id) {
            return false;
        }
        let Some(layer) = store.get(id) else {
            return false;
        };

        let snapshot = RotateSnapshot::capture(layer, pointer);
        self.session = Some(Session::Rotate { id, snapshot });
        true
    }

    /// Pointer move. Recomputes geometry from the start snapshot and
    /// commits it; ignored when no session is active.
    pub fn pointer_move(&mut self, store: &mut LayerStore, pointer: Point) {
        match &self.session {
            None => {}
            Some(Session::Drag { id, snapshot }) => {
                let (x, y) = geometry::drag_position(snapshot, pointer);
                store.update(*id, LayerPatch::position(x, y));
            }
            Some(Session::Resize {
                id,
                handle,
                snapshot,
            }) => {
                let r = geometry::resize(snapshot, *handle, pointer);
                store.update(*id, LayerPatch::geometry(r.x, r.y, r.width, r.height));
            }
            Some(Session::Rotate { id, snapshot }) => {
                let rotation = geometry::rotate(snapshot, pointer);
                store.update(*id, LayerPatch::rotation(rotation));
            }
        }
    }

    /// Pointer release or canvas leave. Ends the session unconditionally;
    /// the layer keeps whatever geometry was last committed.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }
}
