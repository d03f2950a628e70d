//! Render configuration and the enums it is built from.

use std::fmt;
use std::str::FromStr;

use super::RenderError;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 60;

/// Default terminal character aspect ratio (height / width).
pub const DEFAULT_CELL_ASPECT: f32 = 2.0;

/// Default glyph for full-block mode.
pub const FULL_BLOCK: char = '█';

/// Upper half block, foreground paints the top sample.
pub const UPPER_HALF_BLOCK: char = '▀';

/// Lower half block.
pub const LOWER_HALF_BLOCK: char = '▄';

/// Highest accepted denoise strength.
pub const MAX_DENOISE: u8 = 3;

/// Resampling filter used to scale the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMethod {
    /// Lanczos (a = 3) on display-space values
    Lanczos,
    /// Bicubic (a = -0.5) on display-space values
    Bicubic,
    /// Lanczos in linear light; most accurate, can look over-sharp
    LinearLanczos,
    /// Bicubic in linear light; soft and color-accurate
    #[default]
    LinearBicubic,
}

impl ResizeMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ResizeMethod::Lanczos => "lanczos",
            ResizeMethod::Bicubic => "bicubic",
            ResizeMethod::LinearLanczos => "linear_lanczos",
            ResizeMethod::LinearBicubic => "linear_bicubic",
        }
    }

    /// Whether resampling happens in linear light.
    pub fn is_linear(&self) -> bool {
        matches!(self, ResizeMethod::LinearLanczos | ResizeMethod::LinearBicubic)
    }
}

impl fmt::Display for ResizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResizeMethod {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lanczos" => Ok(ResizeMethod::Lanczos),
            "bicubic" => Ok(ResizeMethod::Bicubic),
            "linear_lanczos" => Ok(ResizeMethod::LinearLanczos),
            "linear_bicubic" => Ok(ResizeMethod::LinearBicubic),
            _ => Err(RenderError::UnsupportedMethod {
                kind: "resize method",
                value: s.to_string(),
                expected: "lanczos, bicubic, linear_lanczos, linear_bicubic",
            }),
        }
    }
}

/// Unsharp-mask strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sharpen {
    None,
    #[default]
    Light,
    Medium,
    Strong,
}

/// Parameters of an unsharp mask pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpParams {
    /// Gaussian sigma of the blurred copy
    pub radius: f32,
    /// Percentage of the difference added back
    pub percent: u32,
    /// Minimum per-channel difference before sharpening kicks in
    pub threshold: u8,
}

impl Sharpen {
    pub fn name(&self) -> &'static str {
        match self {
            Sharpen::None => "none",
            Sharpen::Light => "light",
            Sharpen::Medium => "medium",
            Sharpen::Strong => "strong",
        }
    }

    /// Unsharp mask parameters, or `None` when sharpening is disabled.
    pub fn params(&self) -> Option<UnsharpParams> {
        let (radius, percent, threshold) = match self {
            Sharpen::None => return None,
            Sharpen::Light => (0.7, 80, 3),
            Sharpen::Medium => (1.0, 110, 2),
            Sharpen::Strong => (1.2, 140, 1),
        };
        Some(UnsharpParams {
            radius,
            percent,
            threshold,
        })
    }
}

impl fmt::Display for Sharpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sharpen {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Sharpen::None),
            "light" => Ok(Sharpen::Light),
            "medium" => Ok(Sharpen::Medium),
            "strong" => Ok(Sharpen::Strong),
            _ => Err(RenderError::UnsupportedMethod {
                kind: "sharpen level",
                value: s.to_string(),
                expected: "none, light, medium, strong",
            }),
        }
    }
}

/// Which half of the cell the foreground color paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfBlock {
    #[default]
    Upper,
    Lower,
}

impl HalfBlock {
    pub fn glyph(&self) -> char {
        match self {
            HalfBlock::Upper => UPPER_HALF_BLOCK,
            HalfBlock::Lower => LOWER_HALF_BLOCK,
        }
    }
}

impl FromStr for HalfBlock {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upper" => Ok(HalfBlock::Upper),
            "lower" => Ok(HalfBlock::Lower),
            _ => Err(RenderError::UnsupportedMethod {
                kind: "half-block selection",
                value: s.to_string(),
                expected: "upper, lower",
            }),
        }
    }
}

/// How samples map onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    /// Two vertically stacked samples per character
    HalfBlock(HalfBlock),
    /// One sample per character, drawn with the given glyph
    FullBlock(char),
}

impl CellMode {
    /// The render-wide glyph for this mode.
    pub fn glyph(&self) -> char {
        match self {
            CellMode::HalfBlock(half) => half.glyph(),
            CellMode::FullBlock(c) => *c,
        }
    }

    /// Sample rows consumed by one character row.
    pub fn samples_per_row(&self) -> u32 {
        match self {
            CellMode::HalfBlock(_) => 2,
            CellMode::FullBlock(_) => 1,
        }
    }
}

impl Default for CellMode {
    fn default() -> Self {
        CellMode::HalfBlock(HalfBlock::Upper)
    }
}

/// Settings for the quality stages that run after resizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySettings {
    pub denoise: u8,
    pub sharpen: Sharpen,
    pub saturation: f32,
    pub contrast: f32,
}

impl QualitySettings {
    /// Settings under which every stage is skipped.
    pub const NEUTRAL: QualitySettings = QualitySettings {
        denoise: 0,
        sharpen: Sharpen::None,
        saturation: 1.0,
        contrast: 1.0,
    };
}

impl Default for QualitySettings {
    fn default() -> Self {
        QualitySettings {
            denoise: 0,
            sharpen: Sharpen::Light,
            saturation: 1.0,
            contrast: 1.0,
        }
    }
}

/// Everything the rendering pipeline needs to know about a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output width in characters
    pub width: u32,
    pub cell_mode: CellMode,
    /// Character cell height / width
    pub cell_aspect: f32,
    pub resize_method: ResizeMethod,
    pub quality: QualitySettings,
    /// Emit ANSI color escapes; when false only glyphs are written
    pub csi: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: DEFAULT_WIDTH,
            cell_mode: CellMode::default(),
            cell_aspect: DEFAULT_CELL_ASPECT,
            resize_method: ResizeMethod::default(),
            quality: QualitySettings::default(),
            csi: true,
        }
    }
}

impl RenderConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::dimension("width", self.width));
        }
        if !self.cell_aspect.is_finite() || self.cell_aspect <= 0.0 {
            return Err(RenderError::dimension("cell aspect ratio", self.cell_aspect));
        }
        if self.quality.denoise > MAX_DENOISE {
            return Err(RenderError::parameter("denoise strength", self.quality.denoise));
        }
        if !self.quality.saturation.is_finite() || self.quality.saturation < 0.0 {
            return Err(RenderError::parameter("saturation", self.quality.saturation));
        }
        if !self.quality.contrast.is_finite() || self.quality.contrast < 0.0 {
            return Err(RenderError::parameter("contrast", self.quality.contrast));
        }
        if let CellMode::FullBlock(c) = self.cell_mode {
            if c.is_control() {
                return Err(RenderError::parameter("glyph", c.escape_default()));
            }
        }
        Ok(())
    }
}

/// Parse a full-block glyph, which must be exactly one character.
pub fn parse_glyph(s: &str) -> Result<char, RenderError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Ok(c),
        _ => Err(RenderError::parameter("glyph", format!("'{}'", s))),
    }
}
