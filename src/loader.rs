//! Image file loading into a [`PixelGrid`].

use std::path::{Path, PathBuf};

use crate::render::{PixelGrid, RenderError};

/// Errors that can occur while loading the source image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("image file not found: '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image '{}' is empty: {source}", .path.display())]
    Empty {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Load an image file and flatten it to 8-bit RGB.
///
/// Any alpha channel is dropped.
pub fn load_image(path: &Path) -> Result<PixelGrid, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let img = image::open(path)
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    log::debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());

    let (width, height) = img.dimensions();
    PixelGrid::from_rgb_bytes(width, height, img.as_raw()).map_err(|source| LoadError::Empty {
        path: path.to_path_buf(),
        source,
    })
}
