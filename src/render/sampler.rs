//! Partitioning a sample grid into terminal cells.

use super::{CellMode, PixelGrid, Rgb};

/// One terminal character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Foreground is the top sample, background the bottom sample.
    HalfBlock { fg: Rgb, bg: Rgb },
    /// A single sample drawn as the foreground of the frame glyph.
    FullBlock { color: Rgb },
}

/// A grid of cells sharing one render-wide glyph.
///
/// Every row has the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    glyph: char,
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// The glyph every cell is drawn with.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

/// Build a [`Frame`] from a resized and adjusted sample grid.
///
/// In half-block mode samples `(x, 2y)` and `(x, 2y + 1)` become the
/// foreground and background of cell `(x, y)`; an odd trailing sample row
/// is dropped. In full-block mode each sample is one cell.
pub fn sample(grid: &PixelGrid, mode: &CellMode) -> Frame {
    let rows: Vec<Vec<Cell>> = match mode {
        CellMode::HalfBlock(_) => {
            let sample_rows: Vec<&[Rgb]> = grid.rows().collect();
            sample_rows
                .chunks_exact(2)
                .map(|pair| {
                    pair[0]
                        .iter()
                        .zip(pair[1])
                        .map(|(&fg, &bg)| Cell::HalfBlock { fg, bg })
                        .collect()
                })
                .collect()
        }
        CellMode::FullBlock(_) => grid
            .rows()
            .map(|row| row.iter().map(|&color| Cell::FullBlock { color }).collect())
            .collect(),
    };

    Frame {
        glyph: mode.glyph(),
        width: grid.width() as usize,
        rows,
    }
}
