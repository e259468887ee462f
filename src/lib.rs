//! # Paperboard
//!
//! A free-arrangement canvas engine. Content layers (text, image, video)
//! can be positioned, resized, and rotated anywhere on an open 2D canvas,
//! with z-ordering, clipboard duplication, and rotation-aware resize
//! anchoring.
//!
//! ## Architecture
//!
//! Paperboard is organized as a workspace with multiple crates:
//!
//! 1. **paperboard-core** - Constants, error types, geometry primitives
//! 2. **paperboard-canvas** - Layer model, store, gesture state machine,
//!    geometry engine, selection, clipboard, media import
//! 3. **paperboard** - Facade crate that re-exports the public surface
//!
//! Presentation (rendering, text editing surfaces, file pickers) is an
//! external collaborator: it reads layer state through [`CanvasState`] and
//! writes back text and style through the store's patch interface.

pub use paperboard_canvas as canvas;

pub use paperboard_core::{
    constants, Error, ImportError, Point, Result,
};

pub use paperboard_canvas::{
    CanvasState, ClipboardManager, ContentKind, Handle, InteractionController, Key, KeyInput,
    Layer, LayerContent, LayerDraft, LayerId, LayerPatch, LayerStore, SelectionManager, Session,
    StyleMap,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_metadata_present() {
        assert!(!VERSION.is_empty());
        assert!(BUILD_DATE.ends_with("UTC"));
    }
}
