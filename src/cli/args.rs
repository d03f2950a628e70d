//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use super::enums::{OutputFormat, ResizeArg, SharpenArg};

/// Image -> ANSI color output (default .ans, optional Verilog $display)
#[derive(Parser, Debug)]
#[command(name = "pic-to-ansi")]
#[command(version, about = "Image -> ANSI color output (default .ans, optional Verilog $display)", long_about = None)]
#[command(after_help = "Effective defaults: half-block mode is enabled; \
    when neither --upper-half nor --lower-half is set, the upper half block (▀) is used.

EXAMPLES:
    pic-to-ansi logo.png                     # writes logo.ans
    pic-to-ansi logo.png -w 100 --stdout     # preview in the terminal
    pic-to-ansi logo.png -o logo.sv -n logo  # Verilog task named 'logo'")]
pub struct Args {
    /// Input image path
    pub image: PathBuf,

    /// Output width in characters (1-200) [default: 60]
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Output file path (default: <image>.ans, or <image>.sv for verilog)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Task name [default: display_image]
    #[arg(short = 'n', long = "name")]
    pub task_name: Option<String>,

    /// Output format; auto infers from the output extension (.sv/.v/.svh/.vh => verilog) [default: auto]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable ESC CSI color codes
    #[arg(long, help_heading = "Render Options")]
    pub no_csi: bool,

    /// Use full block instead of half block
    #[arg(long, help_heading = "Render Options")]
    pub no_half_block: bool,

    /// Use upper half block ▀
    #[arg(long, conflicts_with = "lower_half", help_heading = "Render Options")]
    pub upper_half: bool,

    /// Use lower half block ▄
    #[arg(long, help_heading = "Render Options")]
    pub lower_half: bool,

    /// Character used in full-block mode (ignored in half-block mode) [default: █]
    #[arg(long = "char", help_heading = "Render Options")]
    pub glyph: Option<String>,

    /// Character cell height/width ratio [default: 2.0]
    #[arg(long, help_heading = "Render Options")]
    pub cell_aspect: Option<f32>,

    /// Resize method [default: linear-bicubic]
    #[arg(long, value_enum, help_heading = "Resize Options")]
    pub resize_method: Option<ResizeArg>,

    /// Sharpen strength [default: light]
    #[arg(long, value_enum, help_heading = "Quality Options")]
    pub sharpen: Option<SharpenArg>,

    /// Denoise strength (0-3, 0=disabled) [default: 0]
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3), help_heading = "Quality Options")]
    pub denoise: Option<u8>,

    /// Saturation multiplier (0.8-1.2 recommended) [default: 1.0]
    #[arg(long, help_heading = "Color Adjustment")]
    pub saturation: Option<f32>,

    /// Contrast multiplier (0.9-1.1 recommended) [default: 1.0]
    #[arg(long, help_heading = "Color Adjustment")]
    pub contrast: Option<f32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
