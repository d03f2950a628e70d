//! Sample-grid sizing for aspect-ratio-correct terminal output.

use super::{CellMode, RenderConfig, RenderError};

/// Tallest sample grid the resizer is asked to produce.
pub const MAX_SAMPLE_HEIGHT: u32 = 8192;

/// Number of character rows needed to show a `src_width x src_height`
/// image `char_width` characters wide.
///
/// Terminal cells are `cell_aspect` times taller than wide, so a square
/// image needs `cell_aspect` times fewer rows than columns. Halves round
/// to even (22.5 gives 22). Never returns fewer than one row.
pub fn char_rows(src_width: u32, src_height: u32, char_width: u32, cell_aspect: f32) -> u32 {
    let img_aspect = src_height as f64 / src_width as f64;
    let rows = (char_width as f64 * img_aspect / cell_aspect as f64).round_ties_even();
    if rows.is_finite() && rows >= 1.0 {
        rows.min(u32::MAX as f64) as u32
    } else {
        1
    }
}

/// Sample-grid dimensions the resizer must produce for `config`.
///
/// Width equals the character width. Height is the character row count
/// times the samples each row consumes (two in half-block mode), so the
/// half-block sample height is always even.
pub fn sample_dimensions(
    src_width: u32,
    src_height: u32,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    if config.width == 0 {
        return Err(RenderError::dimension("width", config.width));
    }
    if src_width == 0 || src_height == 0 {
        return Err(RenderError::dimension(
            "source size",
            format!("{}x{}", src_width, src_height),
        ));
    }
    let rows = char_rows(src_width, src_height, config.width, config.cell_aspect);
    let height = rows
        .checked_mul(config.cell_mode.samples_per_row())
        .filter(|&h| h <= MAX_SAMPLE_HEIGHT)
        .ok_or_else(|| {
            RenderError::dimension(
                "sample height",
                rows as u64 * config.cell_mode.samples_per_row() as u64,
            )
        })?;
    Ok((config.width, height))
}

/// Output size in characters (columns, rows) for `config`.
pub fn char_dimensions(
    src_width: u32,
    src_height: u32,
    config: &RenderConfig,
) -> Result<(u32, u32), RenderError> {
    let (w, h) = sample_dimensions(src_width, src_height, config)?;
    let rows = match config.cell_mode {
        CellMode::HalfBlock(_) => h / 2,
        CellMode::FullBlock(_) => h,
    };
    Ok((w, rows))
}
