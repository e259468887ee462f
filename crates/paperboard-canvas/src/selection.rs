//! Selection and content-edit state.

use crate::model::LayerId;

/// Tracks which layer is selected and which (if any) is being
/// content-edited.
///
/// Invariant: at most one layer is editing, and it is always the selected
/// layer. Selecting a different layer ends any open edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionManager {
    selected: Option<LayerId>,
    editing: Option<LayerId>,
}

impl SelectionManager {
    /// Creates a manager with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected layer, if any.
    pub fn selected(&self) -> Option<LayerId> {
        self.selected
    }

    /// The layer currently in content-edit mode, if any.
    pub fn editing(&self) -> Option<LayerId> {
        self.editing
    }

    /// Returns whether any layer is being content-edited.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Selects a layer. Ends an open edit on a different layer.
    pub fn select(&mut self, id: LayerId) {
        if self.editing.is_some() && self.editing != Some(id) {
            self.editing = None;
        }
        self.selected = Some(id);
    }

    /// Clears both selection and edit state (empty-canvas click).
    pub fn clear(&mut self) {
        self.selected = None;
        self.editing = None;
    }

    /// Puts a layer into content-edit mode, selecting it as well. The
    /// caller is responsible for only editing text layers; z and geometry
    /// are untouched.
    pub fn begin_edit(&mut self, id: LayerId) {
        self.selected = Some(id);
        self.editing = Some(id);
    }

    /// Leaves content-edit mode, returning the layer that was editing so
    /// the committed text can be written back.
    pub fn end_edit(&mut self) -> Option<LayerId> {
        self.editing.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_implies_selected() {
        let mut sel = SelectionManager::new();
        sel.begin_edit(LayerId(3));
        assert_eq!(sel.selected(), Some(LayerId(3)));
        assert_eq!(sel.editing(), Some(LayerId(3)));
    }

    #[test]
    fn test_selecting_other_layer_ends_edit() {
        let mut sel = SelectionManager::new();
        sel.begin_edit(LayerId(3));
        sel.select(LayerId(4));
        assert_eq!(sel.selected(), Some(LayerId(4)));
        assert!(!sel.is_editing());
    }

    #[test]
    fn test_reselecting_editing_layer_keeps_edit() {
        let mut sel = SelectionManager::new();
        sel.begin_edit(LayerId(3));
        sel.select(LayerId(3));
        assert_eq!(sel.editing(), Some(LayerId(3)));
    }

    #[test]
    fn test_clear_resets_both() {
        let mut sel = SelectionManager::new();
        sel.begin_edit(LayerId(1));
        sel.clear();
        assert!(sel.selected().is_none());
        assert!(sel.editing().is_none());
    }

    #[test]
    fn test_end_edit_returns_layer() {
        let mut sel = SelectionManager::new();
        sel.begin_edit(LayerId(9));
        assert_eq!(sel.end_edit(), Some(LayerId(9)));
        assert_eq!(sel.end_edit(), None);
        // selection survives the commit
        assert_eq!(sel.selected(), Some(LayerId(9)));
    }
}
