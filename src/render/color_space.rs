//! sRGB transfer functions between display space and linear light.

use std::sync::OnceLock;

use super::Rgb;

/// Decode a display-space channel (0-255) to linear light (0.0-1.0).
#[inline]
pub fn decode(v: u8) -> f32 {
    decode_table()[v as usize]
}

/// Encode a linear-light channel back to display space.
///
/// Values outside `0.0..=1.0` are clamped after the transfer function, so
/// overshoot from ringing filters saturates instead of wrapping.
#[inline]
pub fn encode(v: f32) -> u8 {
    let s = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Decode all three channels of a color.
#[inline]
pub fn decode_rgb(c: Rgb) -> [f32; 3] {
    [decode(c.r), decode(c.g), decode(c.b)]
}

/// Encode all three channels of a linear-light color.
#[inline]
pub fn encode_rgb(c: [f32; 3]) -> Rgb {
    Rgb::new(encode(c[0]), encode(c[1]), encode(c[2]))
}

fn decode_table() -> &'static [f32; 256] {
    static TABLE: OnceLock<[f32; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0.0f32; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let c = i as f32 / 255.0;
            *slot = if c <= 0.040_45 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            };
        }
        table
    })
}
