//! Lanczos and bicubic resampling on top of `image::imageops`.
//!
//! Display-space methods filter 8-bit values directly. Linear methods decode
//! to an `Rgb32FImage` in linear light, filter there, and encode back.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb32FImage, RgbImage};

use super::color_space;
use super::{PixelGrid, RenderError, ResizeMethod, Rgb};

/// Reconstruction kernel for `method`.
///
/// Bicubic is Catmull-Rom (`a = -0.5`).
pub fn filter_type(method: ResizeMethod) -> FilterType {
    match method {
        ResizeMethod::Lanczos | ResizeMethod::LinearLanczos => FilterType::Lanczos3,
        ResizeMethod::Bicubic | ResizeMethod::LinearBicubic => FilterType::CatmullRom,
    }
}

/// Resample `grid` to exactly `width x height` pixels.
pub fn resize(
    grid: PixelGrid,
    width: u32,
    height: u32,
    method: ResizeMethod,
) -> Result<PixelGrid, RenderError> {
    if width == 0 {
        return Err(RenderError::dimension("target width", width));
    }
    if height == 0 {
        return Err(RenderError::dimension("target height", height));
    }
    if grid.width() == width && grid.height() == height {
        log::debug!("resize: source already {}x{}, skipping", width, height);
        return Ok(grid);
    }

    log::debug!(
        "resize: {}x{} -> {}x{} ({})",
        grid.width(),
        grid.height(),
        width,
        height,
        method
    );

    let filter = filter_type(method);
    let pixels = if method.is_linear() {
        let source: Rgb32FImage = ImageBuffer::from_fn(grid.width(), grid.height(), |x, y| {
            image::Rgb(color_space::decode_rgb(grid.get(x, y)))
        });
        imageops::resize(&source, width, height, filter)
            .pixels()
            .map(|p| color_space::encode_rgb(p.0))
            .collect()
    } else {
        let source: RgbImage = ImageBuffer::from_fn(grid.width(), grid.height(), |x, y| {
            image::Rgb(grid.get(x, y).channels())
        });
        imageops::resize(&source, width, height, filter)
            .pixels()
            .map(|p| Rgb::from_channels(p.0))
            .collect()
    };

    Ok(PixelGrid::from_parts(width, height, pixels))
}
