//! CLI enum types for format, resize method, and sharpen options.

use std::str::FromStr;

use clap::ValueEnum;

use crate::render::{self, RenderError};

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Infer from the output file extension
    #[default]
    Auto,
    /// ANSI true-color text
    Ansi,
    /// Verilog task of $display statements
    Verilog,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Verilog => "verilog",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true).map_err(|_| RenderError::UnsupportedMethod {
            kind: "output format",
            value: s.to_string(),
            expected: "auto, ansi, verilog",
        })
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResizeArg {
    #[value(alias = "linear_lanczos")]
    LinearLanczos,
    #[value(alias = "linear_bicubic")]
    LinearBicubic,
    Lanczos,
    Bicubic,
}

impl From<ResizeArg> for render::ResizeMethod {
    fn from(r: ResizeArg) -> Self {
        match r {
            ResizeArg::LinearLanczos => render::ResizeMethod::LinearLanczos,
            ResizeArg::LinearBicubic => render::ResizeMethod::LinearBicubic,
            ResizeArg::Lanczos => render::ResizeMethod::Lanczos,
            ResizeArg::Bicubic => render::ResizeMethod::Bicubic,
        }
    }
}

/// Sharpen strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SharpenArg {
    None,
    Light,
    Medium,
    Strong,
}

impl From<SharpenArg> for render::Sharpen {
    fn from(s: SharpenArg) -> Self {
        match s {
            SharpenArg::None => render::Sharpen::None,
            SharpenArg::Light => render::Sharpen::Light,
            SharpenArg::Medium => render::Sharpen::Medium,
            SharpenArg::Strong => render::Sharpen::Strong,
        }
    }
}
