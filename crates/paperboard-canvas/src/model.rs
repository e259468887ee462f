//! Layer data model: the transformable content objects on the canvas.

use std::collections::BTreeMap;
use std::fmt;

use paperboard_core::constants::{
    DEFAULT_LAYER_WIDTH, DEFAULT_TEXT_HEIGHT, DEFAULT_VIDEO_HEIGHT, ROTATION_JITTER, TEX_COORD_MAX,
};
use paperboard_core::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Opaque style attributes. The engine stores and merges these but never
/// interprets them; presentation collaborators own the key vocabulary.
pub type StyleMap = BTreeMap<String, Value>;

/// Unique layer identifier, assigned from the store's monotonic counter
/// at creation and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Content kind, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    Image,
    Video,
}

/// Content payload. Opaque to the transform engine: text is stored
/// verbatim, media is a source reference the presentation resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerContent {
    Text {
        text: String,
    },
    Image {
        source: String,
        /// Original file name, shown next to the bounding box when selected.
        filename: Option<String>,
    },
    Video {
        source: String,
    },
}

impl LayerContent {
    /// Returns the content kind of this payload.
    pub fn kind(&self) -> ContentKind {
        match self {
            LayerContent::Text { .. } => ContentKind::Text,
            LayerContent::Image { .. } => ContentKind::Image,
            LayerContent::Video { .. } => ContentKind::Video,
        }
    }
}

/// A positioned, sized, rotated content object on the canvas.
///
/// `x,y` is the top-left corner in canvas space. `rotation` is in degrees
/// and unbounded: repeated full turns accumulate and are never wrapped to
/// a canonical range. `z` is unique per layer and defines both paint
/// order and hit-test priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub z: u64,
    pub content: LayerContent,
    pub style: StyleMap,
    /// Decorative texture coordinates in [0,100], purely cosmetic.
    pub tex_x: f64,
    pub tex_y: f64,
}

impl Layer {
    /// Returns the content kind of this layer.
    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }

    /// Center of the layer's bounding box, ignoring rotation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the text payload, if this is a text layer.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LayerContent::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// Everything needed to create a layer except the store-assigned id and z.
#[derive(Debug, Clone)]
pub struct LayerDraft {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub content: LayerContent,
    pub style: StyleMap,
    pub tex_x: f64,
    pub tex_y: f64,
}

impl LayerDraft {
    /// Draft for a new text layer with the default typography style.
    pub fn text(x: f64, y: f64) -> Self {
        let mut style = default_text_style();
        style.insert("font_size".to_string(), json!(32));
        let (tex_x, tex_y) = random_tex();
        Self {
            x,
            y,
            width: DEFAULT_LAYER_WIDTH,
            height: DEFAULT_TEXT_HEIGHT,
            rotation: rotation_jitter(),
            content: LayerContent::Text {
                text: "New layer".to_string(),
            },
            style,
            tex_x,
            tex_y,
        }
    }

    /// Draft for an image layer whose height preserves the probed aspect.
    pub fn image(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        source: String,
        filename: Option<String>,
    ) -> Self {
        let (tex_x, tex_y) = random_tex();
        Self {
            x,
            y,
            width,
            height,
            rotation: rotation_jitter(),
            content: LayerContent::Image { source, filename },
            style: StyleMap::new(),
            tex_x,
            tex_y,
        }
    }

    /// Draft for a new video layer.
    pub fn video(x: f64, y: f64, source: String) -> Self {
        let (tex_x, tex_y) = random_tex();
        Self {
            x,
            y,
            width: DEFAULT_LAYER_WIDTH,
            height: DEFAULT_VIDEO_HEIGHT,
            rotation: rotation_jitter(),
            content: LayerContent::Video { source },
            style: StyleMap::new(),
            tex_x,
            tex_y,
        }
    }
}

/// Default typography style entries for text layers. Stored as opaque
/// key/value data; only presentation reads them.
pub fn default_text_style() -> StyleMap {
    let mut style = StyleMap::new();
    style.insert("font_size".to_string(), json!(48));
    style.insert("letter_spacing".to_string(), json!(-0.5));
    style.insert("line_height".to_string(), json!(1.1));
    style.insert("color".to_string(), json!("#0a0a0a"));
    style
}

/// A fresh pair of decorative texture coordinates, each independently
/// drawn from [0,100] as a whole number.
pub fn random_tex() -> (f64, f64) {
    let mut rng = rand::rng();
    (
        rng.random_range(0..=TEX_COORD_MAX) as f64,
        rng.random_range(0..=TEX_COORD_MAX) as f64,
    )
}

/// Small random rotation applied to freshly created layers.
pub fn rotation_jitter() -> f64 {
    let mut rng = rand::rng();
    (rng.random::<f64>() - 0.5) * (ROTATION_JITTER * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind() {
        let text = LayerContent::Text {
            text: "hi".to_string(),
        };
        assert_eq!(text.kind(), ContentKind::Text);

        let video = LayerContent::Video {
            source: "clip.mp4".to_string(),
        };
        assert_eq!(video.kind(), ContentKind::Video);
    }

    #[test]
    fn test_random_tex_in_range() {
        for _ in 0..100 {
            let (tx, ty) = random_tex();
            assert!((0.0..=100.0).contains(&tx));
            assert!((0.0..=100.0).contains(&ty));
            assert_eq!(tx, tx.round());
            assert_eq!(ty, ty.round());
        }
    }

    #[test]
    fn test_rotation_jitter_bounds() {
        for _ in 0..100 {
            let r = rotation_jitter();
            assert!(r.abs() <= ROTATION_JITTER);
        }
    }

    #[test]
    fn test_text_draft_defaults() {
        let draft = LayerDraft::text(10.0, 20.0);
        assert_eq!(draft.width, 400.0);
        assert_eq!(draft.height, 300.0);
        assert_eq!(draft.style.get("font_size"), Some(&json!(32)));
        assert_eq!(draft.content.kind(), ContentKind::Text);
    }
}
