//! Pixel-grid data structures shared by the pipelines

/// Single-channel luminance grids and contrast adjustment
pub mod luminance;

pub use luminance::LuminanceImage;
