//! Pixel grid types shared by every pipeline stage.

use super::RenderError;

/// An 8-bit display-space RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Channels as an array, in R, G, B order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_channels(c: [u8; 3]) -> Self {
        Rgb {
            r: c[0],
            g: c[1],
            b: c[2],
        }
    }
}

/// Round and clamp a floating-point channel value into `0..=255`.
#[inline]
pub(crate) fn clamp_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// A row-major grid of display-space pixels.
///
/// Both dimensions are at least 1; [`PixelGrid::new`] enforces this so the
/// pipeline stages never see an empty grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, RenderError> {
        if width == 0 {
            return Err(RenderError::dimension("grid width", width));
        }
        if height == 0 {
            return Err(RenderError::dimension("grid height", height));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::dimension(
                "pixel count",
                format!("{} (expected {} for {}x{})", pixels.len(), expected, width, height),
            ));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel).
    pub fn from_rgb_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self, RenderError> {
        if data.len() % 3 != 0 {
            return Err(RenderError::dimension("rgb buffer length", data.len()));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// A grid filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, RenderError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        PixelGrid {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Pixel at `(x, y)` with coordinates clamped to the grid edge.
    #[inline]
    pub(crate) fn get_clamped(&self, x: i64, y: i64) -> Rgb {
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(x, y)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Apply `f` to every pixel, producing a new grid of the same size.
    pub(crate) fn map(&self, f: impl Fn(Rgb) -> Rgb) -> PixelGrid {
        PixelGrid::from_parts(self.width, self.height, self.pixels.iter().map(|&p| f(p)).collect())
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_width() {
        let err = PixelGrid::new(0, 1, vec![]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimension { what: "grid width", .. }));
    }

    #[test]
    fn test_new_rejects_zero_height() {
        let err = PixelGrid::new(1, 0, vec![]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimension { what: "grid height", .. }));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = PixelGrid::new(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimension { what: "pixel count", .. }));
    }

    #[test]
    fn test_from_rgb_bytes_row_major() {
        let grid = PixelGrid::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(grid.get(1, 0), Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_get_clamped_edges() {
        let grid = PixelGrid::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get_clamped(-5, 0), Rgb::new(1, 2, 3));
        assert_eq!(grid.get_clamped(9, 3), Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_clamp_channel_rounds_and_saturates() {
        assert_eq!(clamp_channel(-3.0), 0);
        assert_eq!(clamp_channel(12.5), 13);
        assert_eq!(clamp_channel(12.4), 12);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(f32::NAN), 0);
    }
}
