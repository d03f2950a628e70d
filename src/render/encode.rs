//! Cell and line encoders: ANSI true-color escapes and Verilog string literals.

use super::{Cell, Frame, Rgb};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// SGR reset, written once at the end of each colored line.
pub const RESET: &str = "\x1b[0m";

fn push_color(out: &mut String, layer: u8, c: Rgb) {
    out.push_str(&format!("{}{};2;{};{};{}m", CSI, layer, c.r, c.g, c.b));
}

/// Append the text of one cell to `out`.
///
/// With `csi` enabled every cell carries its own foreground code (and a
/// background code in half-block mode) so no state is assumed from the
/// previous cell. Without `csi` only the glyph is written.
pub fn encode_cell(cell: &Cell, glyph: char, csi: bool, out: &mut String) {
    if csi {
        match *cell {
            Cell::HalfBlock { fg, bg } => {
                push_color(out, 38, fg);
                push_color(out, 48, bg);
            }
            Cell::FullBlock { color } => push_color(out, 38, color),
        }
    }
    out.push(glyph);
}

/// Encode one row of cells, terminated by a reset when colors are on.
pub fn encode_line(row: &[Cell], glyph: char, csi: bool) -> String {
    // Longest cell: two "\x1b[38;2;255;255;255m" codes plus a 3-byte glyph
    let per_cell = if csi { 43 } else { glyph.len_utf8() };
    let mut line = String::with_capacity(row.len() * per_cell + RESET.len());
    for cell in row {
        encode_cell(cell, glyph, csi, &mut line);
    }
    if csi {
        line.push_str(RESET);
    }
    line
}

/// Encode every row of a frame, top to bottom.
pub fn encode_frame(frame: &Frame, csi: bool) -> Vec<String> {
    frame
        .rows()
        .iter()
        .map(|row| encode_line(row, frame.glyph(), csi))
        .collect()
}

/// Escape `text` for a Verilog string literal.
///
/// Backslashes and double quotes are prefixed with a backslash; every other
/// character, including the ESC byte, passes through unchanged.
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for ch in text.chars() {
        if ch == '\\' || ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Wrap one encoded line in a `$display` statement.
pub fn display_statement(line: &str) -> String {
    format!("$display(\"{}\");", escape_string_literal(line))
}
