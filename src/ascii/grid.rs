//! Row-major glyph grid produced by the block sampler

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// A fixed-size grid of glyphs, row-major, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    rows: usize,
    columns: usize,
    glyphs: Vec<char>,
}

impl AsciiGrid {
    /// Assemble a grid from row-major glyphs
    ///
    /// # Errors
    ///
    /// Returns an error if `glyphs.len() != rows * columns`
    pub fn from_glyphs(rows: usize, columns: usize, glyphs: Vec<char>) -> Result<Self> {
        if glyphs.len() != rows * columns {
            return Err(invalid_parameter(
                "glyphs",
                &glyphs.len(),
                &format!("expected {rows} x {columns} = {} glyphs", rows * columns),
            ));
        }
        Ok(Self {
            rows,
            columns,
            glyphs,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Glyph at `(row, col)`, or `None` when out of bounds
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        if col >= self.columns {
            return None;
        }
        self.glyphs.get(row * self.columns + col).copied()
    }

    /// One row rendered as a string, or `None` when out of bounds
    pub fn row_text(&self, row: usize) -> Option<String> {
        let start = row.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;
        self.glyphs.get(start..end).map(|r| r.iter().collect())
    }

    /// The whole grid rendered as newline-separated rows
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.glyphs.len() + self.rows);
        for (i, chunk) in self.glyphs.chunks(self.columns.max(1)).enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(chunk.iter());
        }
        text
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
