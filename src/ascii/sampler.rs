//! Luminance-to-glyph conversion by rectangular block averaging
//!
//! The image is divided into `rows x columns` blocks whose bounds are
//! truncated at every step; truncation (not rounding) decides exact pixel
//! membership and must stay bit-for-bit stable across releases.

use crate::ascii::grid::AsciiGrid;
use crate::ascii::palette::GlyphPalette;
use crate::io::configuration::{DEFAULT_COLUMNS, VERTICAL_CORRECTION};
use crate::io::error::{GlyphError, Result, invalid_parameter};
use crate::raster::luminance::LuminanceImage;

/// Options controlling the block sampling pass
#[derive(Debug, Clone, Copy)]
pub struct SamplerOptions {
    /// Number of output columns, at least 1
    pub columns: usize,
    /// Vertical correction factor; block height = block width / correction
    ///
    /// Compensates for monospace glyphs being taller than wide. 0.5 makes
    /// each block twice as tall as it is wide
    pub vertical_correction: f64,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            vertical_correction: VERTICAL_CORRECTION,
        }
    }
}

/// Block geometry derived from image dimensions and sampler options
///
/// Row count is derived, never chosen independently:
/// `rows = floor(height / (width / columns / correction))`
#[derive(Debug, Clone, Copy)]
pub struct BlockGeometry {
    /// Real-valued block width in pixels
    pub block_width: f64,
    /// Real-valued block height in pixels
    pub block_height: f64,
    /// Derived output row count
    pub rows: usize,
    /// Requested output column count
    pub columns: usize,
}

impl BlockGeometry {
    /// Derive the block geometry for an image
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero column count, a non-positive or
    /// non-finite vertical correction, or an empty image, and
    /// `InvalidGeometry` when the derived row count is zero
    pub fn derive(width: usize, height: usize, options: SamplerOptions) -> Result<Self> {
        if options.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &options.columns,
                &"column count must be at least 1",
            ));
        }
        if !options.vertical_correction.is_finite() || options.vertical_correction <= 0.0 {
            return Err(invalid_parameter(
                "vertical_correction",
                &options.vertical_correction,
                &"vertical correction must be a positive finite number",
            ));
        }
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{width}x{height}"),
                &"image dimensions must be non-zero",
            ));
        }

        let block_width = width as f64 / options.columns as f64;
        let block_height = block_width / options.vertical_correction;
        let rows = (height as f64 / block_height).floor() as usize;

        if rows == 0 {
            return Err(GlyphError::InvalidGeometry {
                columns: options.columns,
                image_width: width,
                image_height: height,
            });
        }

        Ok(Self {
            block_width,
            block_height,
            rows,
            columns: options.columns,
        })
    }

    /// Vertical pixel bounds `[y1, y2)` of block row `r`, truncated
    pub fn row_bounds(&self, r: usize) -> (usize, usize) {
        let y1 = (r as f64 * self.block_height) as usize;
        let y2 = ((r + 1) as f64 * self.block_height) as usize;
        (y1, y2)
    }

    /// Horizontal pixel bounds `[x1, x2)` of block column `c`, truncated
    pub fn col_bounds(&self, c: usize) -> (usize, usize) {
        let x1 = (c as f64 * self.block_width) as usize;
        let x2 = ((c + 1) as f64 * self.block_width) as usize;
        (x1, x2)
    }
}

/// Convert a luminance image into a glyph grid by block averaging
///
/// For every block the real-valued mean luminance is quantized into the
/// palette; a block left empty by fractional rounding at the boundary samples
/// as darkest. The conversion is pure and all-or-nothing: the geometry is
/// validated before any block is read
///
/// # Errors
///
/// Propagates the validation errors of [`BlockGeometry::derive`]
pub fn map_to_ascii(
    image: &LuminanceImage,
    options: SamplerOptions,
    palette: &GlyphPalette,
) -> Result<AsciiGrid> {
    let geometry = BlockGeometry::derive(image.width(), image.height(), options)?;

    let mut glyphs = Vec::with_capacity(geometry.rows * geometry.columns);
    for r in 0..geometry.rows {
        let (y1, y2) = geometry.row_bounds(r);
        for c in 0..geometry.columns {
            let (x1, x2) = geometry.col_bounds(c);
            let avg = image.window_mean(x1, x2, y1, y2).unwrap_or(0.0);
            glyphs.push(palette.quantize(avg));
        }
    }

    AsciiGrid::from_glyphs(geometry.rows, geometry.columns, glyphs)
}
