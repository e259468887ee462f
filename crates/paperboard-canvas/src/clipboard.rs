//! Snapshot-copy clipboard with chained-offset paste.

use paperboard_core::constants::PASTE_OFFSET;

use crate::layer_store::LayerStore;
use crate::model::{random_tex, Layer, LayerContent, LayerDraft, LayerId, StyleMap};

/// What the clipboard remembers: a structural copy of one layer, minus
/// its identity. The position tracks the most recent paste so successive
/// pastes walk diagonally instead of stacking.
#[derive(Debug, Clone)]
struct ClipboardEntry {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    content: LayerContent,
    style: StyleMap,
}

/// Holds at most one copied layer snapshot.
#[derive(Debug, Clone, Default)]
pub struct ClipboardManager {
    entry: Option<ClipboardEntry>,
}

impl ClipboardManager {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a snapshot is available to paste.
    pub fn has_content(&self) -> bool {
        self.entry.is_some()
    }

    /// Stores a deep snapshot of the layer, excluding its id and z.
    pub fn copy(&mut self, layer: &Layer) {
        self.entry = Some(ClipboardEntry {
            x: layer.x,
            y: layer.y,
            width: layer.width,
            height: layer.height,
            rotation: layer.rotation,
            content: layer.content.clone(),
            style: layer.style.clone(),
        });
    }

    /// Inserts a copy offset from the previous paste position (or from
    /// the copied layer for the first paste), with fresh id, top z, and
    /// re-randomized texture coordinates. Returns the new layer's id, or
    /// `None` when the clipboard is empty.
    pub fn paste(&mut self, store: &mut LayerStore) -> Option<LayerId> {
        let entry = self.entry.as_mut()?;
        entry.x += PASTE_OFFSET;
        entry.y += PASTE_OFFSET;

        let (tex_x, tex_y) = random_tex();
        let id = store.add(LayerDraft {
            x: entry.x,
            y: entry.y,
            width: entry.width,
            height: entry.height,
            rotation: entry.rotation,
            content: entry.content.clone(),
            style: entry.style.clone(),
            tex_x,
            tex_y,
        });
        tracing::debug!(%id, x = entry.x, y = entry.y, "pasted layer");
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayerDraft;

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let mut store = LayerStore::new();
        let mut clipboard = ClipboardManager::new();
        assert!(clipboard.paste(&mut store).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_paste_chain_walks_diagonally() {
        let mut store = LayerStore::new();
        let id = store.add(LayerDraft::text(100.0, 100.0));
        // jittered draft; pin the position for the worked example
        store.update(
            id,
            crate::LayerPatch::position(100.0, 100.0),
        );

        let mut clipboard = ClipboardManager::new();
        clipboard.copy(store.get(id).unwrap());

        let first = clipboard.paste(&mut store).unwrap();
        let second = clipboard.paste(&mut store).unwrap();

        let first = store.get(first).unwrap();
        assert_eq!((first.x, first.y), (120.0, 120.0));
        let second = store.get(second).unwrap();
        assert_eq!((second.x, second.y), (140.0, 140.0));
    }

    #[test]
    fn test_paste_takes_top_z_and_fresh_id() {
        let mut store = LayerStore::new();
        let original = store.add(LayerDraft::text(0.0, 0.0));
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(store.get(original).unwrap());

        let copy = clipboard.paste(&mut store).unwrap();
        assert_ne!(copy, original);
        assert_eq!(store.get(copy).unwrap().z, store.max_z());
        assert!(store.get(copy).unwrap().z > store.get(original).unwrap().z);
    }

    #[test]
    fn test_paste_preserves_structure() {
        let mut store = LayerStore::new();
        let id = store.add(LayerDraft::video(50.0, 60.0, "clip.mp4".to_string()));
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(store.get(id).unwrap());

        let copy_id = clipboard.paste(&mut store).unwrap();
        let original = store.get(id).unwrap();
        let copy = store.get(copy_id).unwrap();
        assert_eq!(copy.content, original.content);
        assert_eq!(copy.width, original.width);
        assert_eq!(copy.height, original.height);
        assert_eq!(copy.rotation, original.rotation);
    }
}
