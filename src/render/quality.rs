//! Post-resize quality stages: denoise, sharpen, saturation, contrast.
//!
//! The stages run in that fixed order. Each one is skipped outright (the
//! input grid is returned untouched) when its setting is neutral, so a
//! neutral [`QualitySettings`] is a bit-exact passthrough.

use super::grid::clamp_channel;
use super::{PixelGrid, QualitySettings, Rgb, UnsharpParams};

/// Largest median window side.
const MAX_MEDIAN_WINDOW: u32 = 5;

/// Run all enabled quality stages over `grid`.
pub fn apply(grid: PixelGrid, settings: &QualitySettings) -> PixelGrid {
    let grid = denoise(grid, settings.denoise);
    let grid = match settings.sharpen.params() {
        Some(params) => unsharp_mask(grid, &params),
        None => {
            log::debug!("sharpen: disabled");
            grid
        }
    };
    let grid = saturate(grid, settings.saturation);
    adjust_contrast(grid, settings.contrast)
}

/// Median filter with a window of `min(5, 2 * strength + 1)` pixels.
///
/// Strength 0 returns the grid unchanged.
pub fn denoise(grid: PixelGrid, strength: u8) -> PixelGrid {
    if strength == 0 {
        return grid;
    }
    let size = (2 * strength as u32 + 1).min(MAX_MEDIAN_WINDOW);
    let radius = (size / 2) as i64;
    log::debug!("denoise: median {}x{}", size, size);

    let mut window: Vec<[u8; 3]> = Vec::with_capacity((size * size) as usize);
    let mut channel: Vec<u8> = Vec::with_capacity((size * size) as usize);
    let mut pixels = Vec::with_capacity(grid.pixels().len());

    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            window.clear();
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    window.push(grid.get_clamped(x + dx, y + dy).channels());
                }
            }
            let mut out = [0u8; 3];
            for (c, slot) in out.iter_mut().enumerate() {
                channel.clear();
                channel.extend(window.iter().map(|p| p[c]));
                channel.sort_unstable();
                *slot = channel[channel.len() / 2];
            }
            pixels.push(Rgb::from_channels(out));
        }
    }

    PixelGrid::from_parts(grid.width(), grid.height(), pixels)
}

/// Normalised 1-D Gaussian kernel covering three sigmas on each side.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let half = (3.0 * sigma).ceil().max(1.0) as i64;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-half..=half)
        .map(|x| (-((x * x) as f32) / two_sigma_sq).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Separable Gaussian blur, clamp-to-edge, rounded back to 8 bits.
fn gaussian_blur(grid: &PixelGrid, sigma: f32) -> PixelGrid {
    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as i64;
    let (w, h) = (grid.width() as i64, grid.height() as i64);

    let mut horizontal = Vec::with_capacity(grid.pixels().len());
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in kernel.iter().enumerate() {
                let p = grid.get_clamped(x + k as i64 - half, y).channels();
                for c in 0..3 {
                    acc[c] += p[c] as f32 * weight;
                }
            }
            horizontal.push(acc);
        }
    }

    let mut pixels = Vec::with_capacity(grid.pixels().len());
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (k, weight) in kernel.iter().enumerate() {
                let sy = (y + k as i64 - half).clamp(0, h - 1);
                let p = horizontal[(sy * w + x) as usize];
                for c in 0..3 {
                    acc[c] += p[c] * weight;
                }
            }
            pixels.push(Rgb::new(
                clamp_channel(acc[0]),
                clamp_channel(acc[1]),
                clamp_channel(acc[2]),
            ));
        }
    }

    PixelGrid::from_parts(grid.width(), grid.height(), pixels)
}

/// Unsharp mask: add back `percent`% of the difference between the image
/// and its blurred copy wherever that difference reaches `threshold`.
pub fn unsharp_mask(grid: PixelGrid, params: &UnsharpParams) -> PixelGrid {
    log::debug!(
        "sharpen: radius={} percent={} threshold={}",
        params.radius,
        params.percent,
        params.threshold
    );
    let blurred = gaussian_blur(&grid, params.radius);
    let amount = params.percent as f32 / 100.0;
    let threshold = params.threshold as i16;

    let pixels = grid
        .pixels()
        .iter()
        .zip(blurred.pixels())
        .map(|(orig, blur)| {
            let o = orig.channels();
            let b = blur.channels();
            let mut out = o;
            for c in 0..3 {
                let diff = o[c] as i16 - b[c] as i16;
                if diff.abs() >= threshold {
                    out[c] = clamp_channel(o[c] as f32 + diff as f32 * amount);
                }
            }
            Rgb::from_channels(out)
        })
        .collect();

    PixelGrid::from_parts(grid.width(), grid.height(), pixels)
}

/// ITU-R BT.601 luma of a display-space color.
#[inline]
fn luma(p: Rgb) -> f32 {
    0.299 * p.r as f32 + 0.587 * p.g as f32 + 0.114 * p.b as f32
}

/// Scale each pixel's chroma (its distance from its own luma) by `factor`.
///
/// A factor of exactly 1.0 returns the grid unchanged.
pub fn saturate(grid: PixelGrid, factor: f32) -> PixelGrid {
    if factor == 1.0 {
        return grid;
    }
    log::debug!("saturation: x{}", factor);
    grid.map(|p| {
        let l = luma(p);
        let scale = |c: u8| clamp_channel(l + (c as f32 - l) * factor);
        Rgb::new(scale(p.r), scale(p.g), scale(p.b))
    })
}

/// Scale each channel's distance from mid-gray (128) by `factor`.
///
/// A factor of exactly 1.0 returns the grid unchanged.
pub fn adjust_contrast(grid: PixelGrid, factor: f32) -> PixelGrid {
    if factor == 1.0 {
        return grid;
    }
    log::debug!("contrast: x{}", factor);
    grid.map(|p| {
        let scale = |c: u8| clamp_channel(128.0 + (c as f32 - 128.0) * factor);
        Rgb::new(scale(p.r), scale(p.g), scale(p.b))
    })
}
