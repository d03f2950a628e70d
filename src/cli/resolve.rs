//! Turning parsed arguments and the config file into a concrete run plan.
//!
//! Precedence for every option: command-line flag, then config file, then
//! the built-in default.

use std::path::{Path, PathBuf};

use super::args::Args;
use super::enums::OutputFormat;
use crate::config::Config;
use crate::render::{
    self, CellMode, HalfBlock, OutputTarget, QualitySettings, RenderConfig, RenderError,
};

/// Narrowest accepted output width.
pub const MIN_WIDTH: u32 = 1;

/// Widest accepted output width.
pub const MAX_WIDTH: u32 = 200;

/// Output extensions that select the Verilog target under `auto`.
pub const VERILOG_EXTENSIONS: &[&str] = &["sv", "v", "svh", "vh"];

/// Everything needed to perform one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub image: PathBuf,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub target: OutputTarget,
    pub render: RenderConfig,
}

/// Resolve `format` to ansi or verilog. Never returns [`OutputFormat::Auto`].
///
/// An explicit format wins; otherwise a Verilog extension on `output`
/// selects verilog; otherwise (including no output path) ansi.
pub fn resolve_format(format: OutputFormat, output: Option<&Path>) -> OutputFormat {
    if format != OutputFormat::Auto {
        return format;
    }
    let is_verilog = output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .map(|e| VERILOG_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if is_verilog {
        OutputFormat::Verilog
    } else {
        OutputFormat::Ansi
    }
}

/// Default output path next to the working directory: `<stem>.sv` when
/// verilog was requested explicitly, `<stem>.ans` otherwise.
pub fn default_output_path(image: &Path, format: OutputFormat) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "output".to_string());
    let ext = if format == OutputFormat::Verilog { "sv" } else { "ans" };
    PathBuf::from(format!("{}.{}", stem, ext))
}

/// Clamp a requested width into `MIN_WIDTH..=MAX_WIDTH`, warning when it moves.
pub fn clamp_width(width: i64) -> u32 {
    let clamped = width.clamp(MIN_WIDTH as i64, MAX_WIDTH as i64) as u32;
    if clamped as i64 != width {
        log::warn!(
            "width should be in {}-{}; {} has been clamped to {}",
            MIN_WIDTH,
            MAX_WIDTH,
            width,
            clamped
        );
    }
    clamped
}

fn cell_mode(args: &Args, config: &Config) -> Result<CellMode, RenderError> {
    let from_file = config.render.cell_mode()?;
    let half_block = if args.no_half_block {
        false
    } else {
        match from_file {
            Some(CellMode::FullBlock(_)) => args.upper_half || args.lower_half,
            _ => true,
        }
    };

    if half_block {
        let half = if args.upper_half {
            HalfBlock::Upper
        } else if args.lower_half {
            HalfBlock::Lower
        } else {
            config.render.half()?.unwrap_or_default()
        };
        Ok(CellMode::HalfBlock(half))
    } else {
        let glyph = match args.glyph.as_deref() {
            Some(s) => render::parse_glyph(s)?,
            None => config.render.glyph()?.unwrap_or(render::FULL_BLOCK),
        };
        Ok(CellMode::FullBlock(glyph))
    }
}

/// Merge `args` over `config` into a validated render configuration.
pub fn render_config(args: &Args, config: &Config) -> Result<RenderConfig, RenderError> {
    let file = &config.render;
    let defaults = QualitySettings::default();

    let width = args
        .width
        .or(file.width)
        .map(clamp_width)
        .unwrap_or(render::DEFAULT_WIDTH);

    let quality = QualitySettings {
        denoise: args.denoise.or(file.denoise).unwrap_or(defaults.denoise),
        sharpen: match args.sharpen {
            Some(s) => s.into(),
            None => file.sharpen()?.unwrap_or(defaults.sharpen),
        },
        saturation: args.saturation.or(file.saturation).unwrap_or(defaults.saturation),
        contrast: args.contrast.or(file.contrast).unwrap_or(defaults.contrast),
    };

    let render = RenderConfig {
        width,
        cell_mode: cell_mode(args, config)?,
        cell_aspect: args
            .cell_aspect
            .or(file.cell_aspect)
            .unwrap_or(render::DEFAULT_CELL_ASPECT),
        resize_method: match args.resize_method {
            Some(m) => m.into(),
            None => file.resize_method()?.unwrap_or_default(),
        },
        quality,
        csi: !args.no_csi && file.csi.unwrap_or(true),
    };
    render.validate()?;
    Ok(render)
}

/// Build the full run plan: output location, target and render settings.
pub fn plan(args: &Args, config: &Config) -> Result<RunPlan, RenderError> {
    let requested = match args.format {
        Some(f) => f,
        None => match config.output.format.as_deref() {
            Some(s) => s.parse()?,
            None => OutputFormat::Auto,
        },
    };

    let output = if args.stdout {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(&args.image, requested)),
        )
    };

    let target = match resolve_format(requested, output.as_deref()) {
        OutputFormat::Verilog => {
            let task = args
                .task_name
                .clone()
                .or_else(|| config.output.task_name.clone())
                .unwrap_or_else(|| render::DEFAULT_TASK_NAME.to_string());
            OutputTarget::verilog(task)?
        }
        _ => OutputTarget::Ansi,
    };

    Ok(RunPlan {
        image: args.image.clone(),
        output,
        target,
        render: render_config(args, config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputSection, RenderSection};
    use crate::render::{ResizeMethod, Sharpen};
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pic-to-ansi", "photo.jpg"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_resolve_explicit_format_wins() {
        assert_eq!(
            resolve_format(OutputFormat::Ansi, Some(Path::new("x.sv"))),
            OutputFormat::Ansi
        );
        assert_eq!(resolve_format(OutputFormat::Verilog, None), OutputFormat::Verilog);
    }

    #[test]
    fn test_resolve_auto_by_extension() {
        for name in ["a.sv", "a.v", "a.svh", "a.vh", "A.SV", "dir/b.Vh"] {
            assert_eq!(
                resolve_format(OutputFormat::Auto, Some(Path::new(name))),
                OutputFormat::Verilog,
                "{}",
                name
            );
        }
        for name in ["a.ans", "a.txt", "noext", "a.sv.bak"] {
            assert_eq!(
                resolve_format(OutputFormat::Auto, Some(Path::new(name))),
                OutputFormat::Ansi,
                "{}",
                name
            );
        }
        assert_eq!(resolve_format(OutputFormat::Auto, None), OutputFormat::Ansi);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/pics/cat.png"), OutputFormat::Auto),
            PathBuf::from("cat.ans")
        );
        assert_eq!(
            default_output_path(Path::new("cat.png"), OutputFormat::Verilog),
            PathBuf::from("cat.sv")
        );
        assert_eq!(
            default_output_path(Path::new(""), OutputFormat::Ansi),
            PathBuf::from("output.ans")
        );
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(60), 60);
        assert_eq!(clamp_width(0), 1);
        assert_eq!(clamp_width(-4), 1);
        assert_eq!(clamp_width(500), 200);
    }

    #[test]
    fn test_plan_defaults() {
        let plan = plan(&args(&[]), &Config::default()).unwrap();
        assert_eq!(plan.output, Some(PathBuf::from("photo.ans")));
        assert_eq!(plan.target, OutputTarget::Ansi);
        assert_eq!(plan.render, RenderConfig::default());
    }

    #[test]
    fn test_plan_sv_output_is_verilog() {
        let plan = plan(&args(&["-o", "frame.sv"]), &Config::default()).unwrap();
        assert_eq!(
            plan.target,
            OutputTarget::Verilog {
                task: "display_image".to_string()
            }
        );
    }

    #[test]
    fn test_plan_explicit_verilog_default_path() {
        let plan = plan(&args(&["-f", "verilog", "-n", "logo"]), &Config::default()).unwrap();
        assert_eq!(plan.output, Some(PathBuf::from("photo.sv")));
        assert_eq!(plan.target, OutputTarget::Verilog { task: "logo".to_string() });
    }

    #[test]
    fn test_plan_stdout_is_ansi() {
        let plan = plan(&args(&["--stdout"]), &Config::default()).unwrap();
        assert!(plan.output.is_none());
        assert_eq!(plan.target, OutputTarget::Ansi);
    }

    #[test]
    fn test_plan_rejects_bad_task_name() {
        let err = plan(&args(&["-o", "x.sv", "-n", "bad\\name"]), &Config::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidTaskName(_)));
    }

    #[test]
    fn test_task_name_ignored_for_ansi() {
        let plan = plan(&args(&["-n", "bad\\name"]), &Config::default()).unwrap();
        assert_eq!(plan.target, OutputTarget::Ansi);
    }

    #[test]
    fn test_full_block_flags() {
        let cfg = render_config(&args(&["--no-half-block", "--char", "X"]), &Config::default())
            .unwrap();
        assert_eq!(cfg.cell_mode, CellMode::FullBlock('X'));

        let cfg = render_config(&args(&["--no-half-block"]), &Config::default()).unwrap();
        assert_eq!(cfg.cell_mode, CellMode::FullBlock('█'));

        assert!(render_config(&args(&["--no-half-block", "--char", "XY"]), &Config::default())
            .is_err());
    }

    #[test]
    fn test_lower_half_flag() {
        let cfg = render_config(&args(&["--lower-half"]), &Config::default()).unwrap();
        assert_eq!(cfg.cell_mode, CellMode::HalfBlock(HalfBlock::Lower));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let config = Config {
            render: RenderSection {
                width: Some(120),
                sharpen: Some("strong".to_string()),
                resize_method: Some("bicubic".to_string()),
                csi: Some(true),
                half: Some("lower".to_string()),
                ..RenderSection::default()
            },
            output: OutputSection::default(),
        };
        let cfg = render_config(
            &args(&["-w", "40", "--no-csi", "--upper-half"]),
            &config,
        )
        .unwrap();
        assert_eq!(cfg.width, 40);
        assert!(!cfg.csi);
        assert_eq!(cfg.cell_mode, CellMode::HalfBlock(HalfBlock::Upper));
        assert_eq!(cfg.quality.sharpen, Sharpen::Strong);
        assert_eq!(cfg.resize_method, ResizeMethod::Bicubic);
    }

    #[test]
    fn test_config_file_full_block() {
        let config = Config {
            render: RenderSection {
                half_block: Some(false),
                glyph: Some("#".to_string()),
                csi: Some(false),
                ..RenderSection::default()
            },
            output: OutputSection {
                format: Some("verilog".to_string()),
                task_name: Some("art".to_string()),
            },
        };
        let plan = plan(&args(&[]), &config).unwrap();
        assert_eq!(plan.render.cell_mode, CellMode::FullBlock('#'));
        assert!(!plan.render.csi);
        assert_eq!(plan.output, Some(PathBuf::from("photo.sv")));
        assert_eq!(plan.target, OutputTarget::Verilog { task: "art".to_string() });
    }

    #[test]
    fn test_invalid_cell_aspect_rejected() {
        assert!(matches!(
            render_config(&args(&["--cell-aspect", "0"]), &Config::default()),
            Err(RenderError::InvalidDimension { .. })
        ));
    }
}
