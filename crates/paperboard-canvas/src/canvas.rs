//! Canvas facade wiring the store, selection, clipboard, and gestures
//! behind one pointer/keyboard event surface.

use std::path::Path;

use paperboard_core::constants::DEFAULT_LAYER_WIDTH;
use paperboard_core::{Point, Result};
use rand::Rng;

use crate::clipboard::ClipboardManager;
use crate::geometry::Handle;
use crate::import;
use crate::interaction::InteractionController;
use crate::layer_store::{LayerPatch, LayerStore};
use crate::model::{ContentKind, Layer, LayerDraft, LayerId};
use crate::selection::SelectionManager;

/// Keys the canvas listens for globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    C,
    V,
    Delete,
    Backspace,
}

/// A keyboard event as delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    /// Whether the platform copy/paste modifier is held.
    fn modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Canvas state managing layers and the interaction surface.
///
/// Presentation collaborators read layer state through [`layers_by_z`]
/// and [`get`] after each event; nothing here pushes render updates.
///
/// [`layers_by_z`]: CanvasState::layers_by_z
/// [`get`]: CanvasState::get
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    pub store: LayerStore,
    pub selection: SelectionManager,
    pub clipboard: ClipboardManager,
    pub controller: InteractionController,
}

impl CanvasState {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self {
            store: LayerStore::new(),
            selection: SelectionManager::new(),
            clipboard: ClipboardManager::new(),
            controller: InteractionController::new(),
        }
    }

    // ── Layer creation ──

    /// Adds a text layer with default content and typography. Placement
    /// is jittered unless a drop point is given, in which case the layer
    /// is centered on it. The new layer is selected.
    pub fn add_text_layer(&mut self, drop: Option<Point>) -> LayerId {
        let draft = LayerDraft::text(0.0, 0.0);
        let (x, y) = placement(drop, draft.width, draft.height);
        let id = self.store.add(LayerDraft { x, y, ..draft });
        self.selection.select(id);
        id
    }

    /// Adds a video layer for the given source. Same placement rules as
    /// text layers.
    pub fn add_video_layer(&mut self, source: impl Into<String>, drop: Option<Point>) -> LayerId {
        let draft = LayerDraft::video(0.0, 0.0, source.into());
        let (x, y) = placement(drop, draft.width, draft.height);
        let id = self.store.add(LayerDraft { x, y, ..draft });
        self.selection.select(id);
        id
    }

    /// Imports an image file as a new layer. Waits for the asynchronous
    /// dimension probe; width is fixed and height follows the natural
    /// aspect ratio. The layer is inserted atomically once the probe
    /// resolves; on failure nothing is inserted and the error is
    /// returned.
    pub async fn import_image_layer(
        &mut self,
        path: &Path,
        drop: Option<Point>,
    ) -> Result<LayerId> {
        let dims = match import::probe_image(path).await {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "image import discarded");
                return Err(e);
            }
        };

        let width = DEFAULT_LAYER_WIDTH;
        let height = (width / dims.aspect()).round();
        let (x, y) = placement(drop, width, height);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        let id = self.store.add(LayerDraft::image(
            x,
            y,
            width,
            height,
            path.display().to_string(),
            filename,
        ));
        self.selection.select(id);
        Ok(id)
    }

    // ── Pointer surface ──

    /// Pointer press on a layer body: starts a drag unless a handle
    /// already claimed this press or the layer is being edited.
    pub fn pointer_down_body(&mut self, id: LayerId, pointer: Point) -> bool {
        self.controller
            .begin_drag(&mut self.store, &mut self.selection, id, pointer)
    }

    /// Pointer press on a resize grip of the selected layer.
    pub fn pointer_down_handle(&mut self, id: LayerId, handle: Handle, pointer: Point) -> bool {
        self.controller
            .begin_resize(&self.store, &self.selection, id, handle, pointer)
    }

    /// Pointer press on the rotate grip of the selected layer.
    pub fn pointer_down_rotate(&mut self, id: LayerId, pointer: Point) -> bool {
        self.controller
            .begin_rotate(&self.store, &self.selection, id, pointer)
    }

    /// Pointer move over the canvas.
    pub fn pointer_move(&mut self, pointer: Point) {
        self.controller.pointer_move(&mut self.store, pointer);
    }

    /// Pointer release: ends any open gesture, keeping the last computed
    /// geometry.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Pointer leaving the canvas area, treated the same as a release.
    pub fn pointer_leave(&mut self) {
        self.controller.pointer_up();
    }

    /// Click on empty canvas: clears selection and edit state.
    pub fn canvas_click(&mut self) {
        self.selection.clear();
    }

    /// Double-click on a layer: enters content-edit mode for text layers
    /// only. Geometry and z order are untouched.
    pub fn double_click(&mut self, id: LayerId) {
        let Some(layer) = self.store.get(id) else {
            return;
        };
        if layer.kind() != ContentKind::Text {
            return;
        }
        self.selection.begin_edit(id);
    }

    /// Commits edited text, leaving edit mode and writing the text back
    /// to the layer. No-op when nothing is being edited.
    pub fn commit_text(&mut self, text: impl Into<String>) {
        if let Some(id) = self.selection.end_edit() {
            self.store.update(id, LayerPatch::text(text));
        }
    }

    // ── Keyboard surface ──

    /// Global key handler: copy, paste, delete. All suppressed while any
    /// layer is in edit mode, all acting on the current selection.
    pub fn key_down(&mut self, input: KeyInput) {
        if self.selection.is_editing() {
            return;
        }
        match input.key {
            Key::C if input.modifier() => self.copy_selected(),
            Key::V if input.modifier() => {
                self.paste();
            }
            Key::Delete | Key::Backspace => self.delete_selected(),
            _ => {}
        }
    }

    /// Copies the selected layer into the clipboard. No-op without a
    /// selection or while editing.
    pub fn copy_selected(&mut self) {
        if self.selection.is_editing() {
            return;
        }
        let Some(id) = self.selection.selected() else {
            return;
        };
        if let Some(layer) = self.store.get(id) {
            self.clipboard.copy(layer);
        }
    }

    /// Pastes the clipboard snapshot, selecting the new layer. No-op on
    /// an empty clipboard or while editing.
    pub fn paste(&mut self) -> Option<LayerId> {
        if self.selection.is_editing() {
            return None;
        }
        let id = self.clipboard.paste(&mut self.store)?;
        self.selection.select(id);
        Some(id)
    }

    /// Deletes the selected layer and clears the selection. No-op
    /// without a selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selection.selected() else {
            return;
        };
        self.remove_layer(id);
    }

    /// Removes a layer by id. Clears selection and edit state if they
    /// pointed at it; other selections are left untouched.
    pub fn remove_layer(&mut self, id: LayerId) {
        if self.store.remove(id).is_some() && self.selection.selected() == Some(id) {
            self.selection.clear();
        }
    }

    // ── Presentation read interface ──

    /// Gets a layer by id.
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.store.get(id)
    }

    /// All layers in paint order, bottom first.
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        self.store.layers_by_z()
    }

    /// Number of layers on the canvas.
    pub fn layer_count(&self) -> usize {
        self.store.len()
    }

    /// The currently selected layer id, if any.
    pub fn selected(&self) -> Option<LayerId> {
        self.selection.selected()
    }

    /// The layer currently in content-edit mode, if any.
    pub fn editing(&self) -> Option<LayerId> {
        self.selection.editing()
    }
}

/// Placement for a new layer: centered on the drop point when given,
/// otherwise jittered within the canvas's landing area.
fn placement(drop: Option<Point>, width: f64, height: f64) -> (f64, f64) {
    match drop {
        Some(p) => (p.x - width / 2.0, p.y - height / 2.0),
        None => {
            let mut rng = rand::rng();
            (
                100.0 + rng.random::<f64>() * 200.0,
                80.0 + rng.random::<f64>() * 200.0,
            )
        }
    }
}
