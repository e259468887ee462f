//! Authoritative layer storage with monotonic id and z allocation.

use std::collections::HashMap;

use crate::model::{Layer, LayerContent, LayerDraft, LayerId, StyleMap};

/// A partial update applied to an existing layer.
///
/// Fields left as `None` are untouched. Style entries are merged key by
/// key into the layer's style map, replacing existing values.
#[derive(Debug, Clone, Default)]
pub struct LayerPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub text: Option<String>,
    pub style: Option<StyleMap>,
}

impl LayerPatch {
    /// Patch that moves a layer to a new top-left position.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Patch that applies a resize result (position and size together).
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Patch that sets the rotation in degrees.
    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    /// Patch that replaces the text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Owns the id -> layer mapping and the monotonic id/z counters.
///
/// All layer mutation passes through this store; no other component
/// retains a layer reference across gestures. Both counters only ever
/// advance for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct LayerStore {
    layers: HashMap<LayerId, Layer>,
    next_id: u64,
    max_z: u64,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            layers: HashMap::new(),
            next_id: 1,
            max_z: 0,
        }
    }

    /// Inserts a new layer, assigning a fresh id and the top z value.
    pub fn add(&mut self, draft: LayerDraft) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.max_z += 1;

        let layer = Layer {
            id,
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            rotation: draft.rotation,
            z: self.max_z,
            content: draft.content,
            style: draft.style,
            tex_x: draft.tex_x,
            tex_y: draft.tex_y,
        };
        tracing::debug!(%id, z = layer.z, "layer added");
        self.layers.insert(id, layer);
        id
    }

    /// Applies a partial update. Silently does nothing if the id is
    /// absent; missing targets are tolerated, not errors.
    pub fn update(&mut self, id: LayerId, patch: LayerPatch) {
        let Some(layer) = self.layers.get_mut(&id) else {
            tracing::debug!(%id, "update for absent layer ignored");
            return;
        };

        if let Some(x) = patch.x {
            layer.x = x;
        }
        if let Some(y) = patch.y {
            layer.y = y;
        }
        if let Some(width) = patch.width {
            layer.width = width;
        }
        if let Some(height) = patch.height {
            layer.height = height;
        }
        if let Some(rotation) = patch.rotation {
            layer.rotation = rotation;
        }
        if let Some(text) = patch.text {
            if let LayerContent::Text { text: t } = &mut layer.content {
                *t = text;
            }
        }
        if let Some(style) = patch.style {
            for (key, value) in style {
                layer.style.insert(key, value);
            }
        }
    }

    /// Removes a layer, returning it. No-op on absent ids.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let removed = self.layers.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "layer removed");
        }
        removed
    }

    /// Reassigns the layer to a fresh top z. The counter always advances,
    /// even when the layer is already topmost.
    pub fn bring_to_front(&mut self, id: LayerId) {
        let Some(layer) = self.layers.get_mut(&id) else {
            return;
        };
        self.max_z += 1;
        layer.z = self.max_z;
    }

    /// Gets a layer by id.
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Returns whether a layer with this id exists.
    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    /// Iterates over all layers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// All layers sorted by ascending z (paint order, bottom first).
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.layers.values().collect();
        layers.sort_by_key(|l| l.z);
        layers
    }

    /// Number of layers in the store.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true when the store holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Current top z value.
    pub fn max_z(&self) -> u64 {
        self.max_z
    }
}
