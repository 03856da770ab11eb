//! Cell geometry, paging arithmetic, and aspect-preserving fit scaling

use crate::io::error::{Result, invalid_parameter};

/// Fixed grid geometry shared by every page of a collage
///
/// The canvas is divided into `rows x cols` cells by integer division;
/// remainder pixels become unused padding at the canvas edge. Each source
/// image is scaled uniformly to fit a `cell target` box and centered in its
/// cell
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    canvas_width: u32,
    canvas_height: u32,
    cell_target_width: u32,
    cell_target_height: u32,
}

impl GridLayout {
    /// Create a layout
    ///
    /// # Errors
    ///
    /// Returns an error if any grid, canvas, or cell-target dimension is zero
    pub fn new(
        rows: usize,
        cols: usize,
        canvas: (u32, u32),
        cell_target: (u32, u32),
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"grid must have at least one row and one column",
            ));
        }
        let (canvas_width, canvas_height) = canvas;
        if canvas_width == 0 || canvas_height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{canvas_width}x{canvas_height}"),
                &"canvas dimensions must be non-zero",
            ));
        }
        let (cell_target_width, cell_target_height) = cell_target;
        if cell_target_width == 0 || cell_target_height == 0 {
            return Err(invalid_parameter(
                "cell_target",
                &format!("{cell_target_width}x{cell_target_height}"),
                &"cell target dimensions must be non-zero",
            ));
        }
        Ok(Self {
            rows,
            cols,
            canvas_width,
            canvas_height,
            cell_target_width,
            cell_target_height,
        })
    }

    /// Grid row count
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid column count
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Cell width from integer division of the canvas width
    pub const fn cell_width(&self) -> u32 {
        self.canvas_width / self.cols as u32
    }

    /// Cell height from integer division of the canvas height
    pub const fn cell_height(&self) -> u32 {
        self.canvas_height / self.rows as u32
    }

    /// Number of cells on one page
    pub const fn images_per_page(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of pages needed for `image_count` images
    ///
    /// `rows * cols * k` images fill exactly `k` pages; a remainder adds one
    /// partially filled page
    pub fn page_count(&self, image_count: usize) -> usize {
        image_count.div_ceil(self.images_per_page())
    }

    /// Uniform fit ratio of an `orig_w x orig_h` image into the cell target
    ///
    /// `min(tw / ow, th / oh)`; a ratio above 1 upscales, the aspect ratio is
    /// always preserved
    pub fn fit_scale(&self, orig_w: u32, orig_h: u32) -> f64 {
        if orig_w == 0 || orig_h == 0 {
            return 0.0;
        }
        let width_ratio = f64::from(self.cell_target_width) / f64::from(orig_w);
        let height_ratio = f64::from(self.cell_target_height) / f64::from(orig_h);
        width_ratio.min(height_ratio)
    }

    /// Scaled dimensions after fitting, rounded to the nearest pixel
    ///
    /// Dimensions are floored at one pixel so a degenerate ratio never
    /// produces an empty resize target
    pub fn fit_dimensions(&self, orig_w: u32, orig_h: u32) -> (u32, u32) {
        let ratio = self.fit_scale(orig_w, orig_h);
        let new_w = ((f64::from(orig_w) * ratio).round() as u32).max(1);
        let new_h = ((f64::from(orig_h) * ratio).round() as u32).max(1);
        (new_w, new_h)
    }

    /// Top-left paste offset for a `scaled_w x scaled_h` image in cell
    /// `(row, col)`
    ///
    /// Centering uses floor division, leaving a one-pixel asymmetric margin
    /// on odd differences. An image larger than its cell gets a negative
    /// margin and overflows into its neighbors; that is accepted behavior,
    /// not guarded against
    pub fn cell_offset(&self, row: usize, col: usize, scaled_w: u32, scaled_h: u32) -> (i64, i64) {
        let cell_x = col as i64 * i64::from(self.cell_width());
        let cell_y = row as i64 * i64::from(self.cell_height());
        let x = cell_x + (i64::from(self.cell_width()) - i64::from(scaled_w)).div_euclid(2);
        let y = cell_y + (i64::from(self.cell_height()) - i64::from(scaled_h)).div_euclid(2);
        (x, y)
    }
}
