//! Configuration file handling for pic-to-ansi.
//!
//! Loads render defaults from `~/.config/pic-to-ansi/config.toml` or a custom path.
//! Command-line flags override anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{self, CellMode, HalfBlock, RenderError, ResizeMethod, Sharpen};

/// Configuration file structure for pic-to-ansi.
/// Loaded from ~/.config/pic-to-ansi/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    pub width: Option<i64>,
    pub half_block: Option<bool>,
    /// "upper" or "lower"
    pub half: Option<String>,
    /// Full-block glyph
    #[serde(rename = "char")]
    pub glyph: Option<String>,
    pub cell_aspect: Option<f32>,
    pub resize_method: Option<String>,
    pub sharpen: Option<String>,
    pub denoise: Option<u8>,
    pub saturation: Option<f32>,
    pub contrast: Option<f32>,
    pub csi: Option<bool>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// "auto", "ansi" or "verilog"
    pub format: Option<String>,
    pub task_name: Option<String>,
}

impl RenderSection {
    pub fn resize_method(&self) -> Result<Option<ResizeMethod>, RenderError> {
        self.resize_method.as_deref().map(str::parse::<ResizeMethod>).transpose()
    }

    pub fn sharpen(&self) -> Result<Option<Sharpen>, RenderError> {
        self.sharpen.as_deref().map(str::parse::<Sharpen>).transpose()
    }

    pub fn half(&self) -> Result<Option<HalfBlock>, RenderError> {
        self.half.as_deref().map(str::parse::<HalfBlock>).transpose()
    }

    pub fn glyph(&self) -> Result<Option<char>, RenderError> {
        self.glyph.as_deref().map(render::parse_glyph).transpose()
    }

    /// Cell mode implied by the file alone, if it says anything about it.
    pub fn cell_mode(&self) -> Result<Option<CellMode>, RenderError> {
        let half = self.half()?;
        let glyph = self.glyph()?;
        Ok(match self.half_block {
            Some(false) => Some(CellMode::FullBlock(glyph.unwrap_or(render::FULL_BLOCK))),
            Some(true) => Some(CellMode::HalfBlock(half.unwrap_or_default())),
            None => half.map(CellMode::HalfBlock),
        })
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed, or if a
    /// value is outside what the renderer accepts.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            config.check().map_err(|e| ConfigError::InvalidValue {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse every string-typed value so bad spellings surface at load time.
    fn check(&self) -> Result<(), RenderError> {
        self.render.resize_method()?;
        self.render.sharpen()?;
        self.render.cell_mode()?;
        if let Some(format) = self.output.format.as_deref() {
            format.parse::<crate::cli::OutputFormat>()?;
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: PathBuf,
        source: RenderError,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, source } => {
                write!(f, "Invalid value in config file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pic-to-ansi").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pic-to-ansi/config.toml")
        })
}
