//! One end-to-end conversion: plan, load, render, write.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{self, Args, RunPlan};
use crate::config::{Config, ConfigError};
use crate::loader::{self, LoadError};
use crate::render::{self, FileBanner, OutputTarget, RenderError};

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// `None` when the text went to stdout
    pub output: Option<PathBuf>,
    pub format: &'static str,
    /// Output size in characters
    pub size: (u32, u32),
}

/// Load the config named by `args` and perform the conversion.
pub fn run(args: &Args) -> Result<RunSummary, AppError> {
    let config = Config::load(args.config.as_deref())?;
    let plan = cli::plan(args, &config)?;
    execute(&plan)
}

/// Perform a conversion described by `plan`.
pub fn execute(plan: &RunPlan) -> Result<RunSummary, AppError> {
    let grid = loader::load_image(&plan.image)?;
    let (src_w, src_h) = (grid.width(), grid.height());
    let size = render::char_dimensions(src_w, src_h, &plan.render)?;

    log::info!(
        "rendering {} ({}x{}) as {}x{} characters, format={}",
        plan.image.display(),
        src_w,
        src_h,
        size.0,
        size.1,
        plan.target
    );

    let body = render::render_to_string(grid, &plan.render, &plan.target)?;

    match &plan.output {
        Some(path) => {
            let mut text = String::new();
            if matches!(plan.target, OutputTarget::Verilog { .. }) {
                text.push_str(&banner(plan, (src_w, src_h), size).to_string());
            }
            text.push_str(&body);
            std::fs::write(path, text).map_err(|source| AppError::Write {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(body.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| AppError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    Ok(RunSummary {
        output: plan.output.clone(),
        format: plan.target.name(),
        size,
    })
}

fn banner(plan: &RunPlan, source_size: (u32, u32), output_size: (u32, u32)) -> FileBanner {
    let quality = &plan.render.quality;
    FileBanner {
        source_name: file_name(&plan.image),
        source_size,
        output_size,
        format: plan.target.name(),
        resize_method: plan.render.resize_method.to_string(),
        sharpen: quality.sharpen.to_string(),
        denoise: quality.denoise,
        saturation: quality.saturation,
        contrast: quality.contrast,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
