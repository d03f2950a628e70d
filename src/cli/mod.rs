//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, and the rules that
//! merge flags with the config file into a run plan.

mod args;
mod enums;
mod resolve;

pub use args::Args;
pub use enums::{OutputFormat, ResizeArg, SharpenArg};
pub use resolve::{
    clamp_width, default_output_path, plan, render_config, resolve_format, RunPlan, MAX_WIDTH,
    MIN_WIDTH, VERILOG_EXTENSIONS,
};
