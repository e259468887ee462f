//! Media dimension probing for image import.
//!
//! Importing an image must not insert a half-specified layer: placement
//! waits for the file's natural dimensions, and only then is the layer
//! added to the store in one step. The probe reads image headers on a
//! blocking worker so the event loop stays responsive; there is no
//! cancellation and no retry. On failure nothing is inserted.

use std::path::Path;

use paperboard_core::{Error, ImportError, Result};

/// Natural pixel dimensions of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaDimensions {
    pub width: u32,
    pub height: u32,
}

impl MediaDimensions {
    /// Width-over-height aspect ratio.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Probes an image file for its natural dimensions.
///
/// Decodes only the header, not the pixel data. Degenerate (zero-sized)
/// dimensions are rejected so later aspect math cannot divide by zero.
pub async fn probe_image(path: &Path) -> Result<MediaDimensions> {
    let display = path.display().to_string();
    let owned = path.to_path_buf();

    let probed = tokio::task::spawn_blocking(move || image::image_dimensions(&owned))
        .await
        .map_err(|e| Error::other(format!("dimension probe task failed: {e}")))?;

    let (width, height) = probed.map_err(|e| ImportError::ProbeFailed {
        path: display.clone(),
        reason: e.to_string(),
    })?;

    if width == 0 || height == 0 {
        return Err(ImportError::DegenerateDimensions {
            path: display,
            width,
            height,
        }
        .into());
    }

    Ok(MediaDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect() {
        let dims = MediaDimensions {
            width: 800,
            height: 200,
        };
        assert_eq!(dims.aspect(), 4.0);
    }
}
