//! pic-to-ansi library crate.
//!
//! Converts raster images into true-color terminal text (half-block or
//! full-block glyphs), optionally wrapped in a Verilog task of `$display`
//! statements. The [`render`] module is the self-contained pipeline; the
//! other modules are the command-line layer around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod loader;
pub mod render;
