//! ASCII conversion: block sampling, glyph palettes, and the output grid

/// ASCII output grid type
pub mod grid;
/// Glyph palettes and luminance quantization
pub mod palette;
/// Block-sampling conversion algorithm
pub mod sampler;

pub use grid::AsciiGrid;
pub use palette::GlyphPalette;
pub use sampler::{BlockGeometry, SamplerOptions, map_to_ascii};
