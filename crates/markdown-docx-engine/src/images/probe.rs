use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("cannot read image header: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has a zero dimension ({width}x{height})")]
    Degenerate { width: u32, height: u32 },
}

/// Answers existence and pixel-size questions about image files.
///
/// Implementations hold no mutable state, so distinct images may be
/// probed independently.
pub trait ImageProbe {
    fn exists(&self, path: &Path) -> bool;

    /// Returns the intrinsic `(width, height)` in pixels.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}

/// Probes the local filesystem, reading only as much of each file as the
/// `image` crate needs to find its dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageProbe;

impl ImageProbe for FsImageProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(ProbeError::Degenerate { width, height });
        }
        Ok((width, height))
    }
}
