//! Engine-wide constants.

/// Smallest width a layer may have at rest, in canvas units.
pub const MIN_LAYER_WIDTH: f64 = 80.0;

/// Smallest height a layer may have at rest, in canvas units.
pub const MIN_LAYER_HEIGHT: f64 = 60.0;

/// Diagonal offset applied to each successive paste.
pub const PASTE_OFFSET: f64 = 20.0;

/// Width assigned to newly created text and media layers.
pub const DEFAULT_LAYER_WIDTH: f64 = 400.0;

/// Height assigned to newly created text layers.
pub const DEFAULT_TEXT_HEIGHT: f64 = 300.0;

/// Height assigned to newly created video layers.
pub const DEFAULT_VIDEO_HEIGHT: f64 = 280.0;

/// New layers receive a random rotation in `±ROTATION_JITTER` degrees.
pub const ROTATION_JITTER: f64 = 2.0;

/// Upper bound (inclusive) of the decorative texture coordinate range.
pub const TEX_COORD_MAX: u32 = 100;
