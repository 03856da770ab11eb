//! Fractal noise field rendering through a colormap

/// Scalar-to-RGB colormapping
pub mod colormap;
/// Fractal noise field sampling
pub mod field;

pub use colormap::{Colormap, field_to_image};
pub use field::NoiseField;
