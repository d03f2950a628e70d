//! Image-to-glyph rendering pipeline.
//!
//! Converts a [`PixelGrid`] into colored terminal text in five steps:
//!
//! 1. **Resize** - resample to the sample grid, optionally in linear light
//! 2. **Quality** - denoise, sharpen, saturation, contrast
//! 3. **Sample** - pair samples into half-block cells or one per full block
//! 4. **Encode** - ANSI true-color escapes per cell, one reset per line
//! 5. **Assemble** - raw lines or a Verilog task of `$display` statements
//!
//! Everything here is pure and synchronous. Configuration is validated
//! before the first stage runs; after that no stage can fail.

pub mod color_space;
mod dimensions;
pub mod encode;
mod error;
mod grid;
pub mod output;
pub mod quality;
pub mod resize;
mod sampler;
mod settings;

pub use dimensions::{char_dimensions, char_rows, sample_dimensions, MAX_SAMPLE_HEIGHT};
pub use encode::{display_statement, encode_cell, encode_frame, encode_line, escape_string_literal};
pub use error::RenderError;
pub use grid::{PixelGrid, Rgb};
pub use output::{assemble, FileBanner, OutputTarget, DEFAULT_TASK_NAME};
pub use resize::resize;
pub use sampler::{sample, Cell, Frame};
pub use settings::{
    parse_glyph, CellMode, HalfBlock, QualitySettings, RenderConfig, ResizeMethod, Sharpen,
    UnsharpParams, DEFAULT_CELL_ASPECT, DEFAULT_WIDTH, FULL_BLOCK, LOWER_HALF_BLOCK, MAX_DENOISE,
    UPPER_HALF_BLOCK,
};

/// Resize, adjust and sample `grid` into a [`Frame`].
pub fn render_frame(grid: PixelGrid, config: &RenderConfig) -> Result<Frame, RenderError> {
    config.validate()?;
    let (width, height) = sample_dimensions(grid.width(), grid.height(), config)?;

    log::debug!(
        "render: {}x{} source -> {}x{} samples ({:?})",
        grid.width(),
        grid.height(),
        width,
        height,
        config.cell_mode
    );

    let resized = resize(grid, width, height, config.resize_method)?;
    let adjusted = quality::apply(resized, &config.quality);
    Ok(sample(&adjusted, &config.cell_mode))
}

/// Encode every row of `grid` as a line of terminal text.
pub fn render_lines(grid: PixelGrid, config: &RenderConfig) -> Result<Vec<String>, RenderError> {
    let frame = render_frame(grid, config)?;
    Ok(encode_frame(&frame, config.csi))
}

/// Run the whole pipeline and assemble the output text for `target`.
pub fn render_to_string(
    grid: PixelGrid,
    config: &RenderConfig,
    target: &OutputTarget,
) -> Result<String, RenderError> {
    let lines = render_lines(grid, config)?;
    Ok(assemble(&lines, target))
}
