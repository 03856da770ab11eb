//! Raster toolkit built around two block-level pixel transforms: luminance
//! block sampling for ASCII conversion, and grid collage paging for animated
//! export, plus a colormapped fractal noise renderer.
//!
//! Each pipeline is a single pass over an in-memory buffer: decode inputs,
//! run the pure transform, hand the result to an encoder.

#![deny(unsafe_code)]

/// Block sampling, glyph palettes, and the ASCII output grid
pub mod ascii;
/// Canvas paging, fit scaling, and page composition
pub mod collage;
/// Input/output operations and error handling
pub mod io;
/// Fractal noise field sampling and colormapping
pub mod noise;
/// Pixel-grid data structures shared by the pipelines
pub mod raster;

pub use io::error::{GlyphError, Result};
