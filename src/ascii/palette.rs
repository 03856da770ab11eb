//! Glyph palettes mapping quantized luminance levels to characters

use crate::io::error::{Result, invalid_parameter};

// Both ramps are human-curated by visual density, densest glyph first.
// They are fixed reference data, not derived from character ink coverage.
/// Extended 69-level grayscale ramp
pub const PALETTE_FULL: &str =
    "&@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~i!lI;:,\\\"^`'. ";

/// Compact 10-level grayscale ramp
pub const PALETTE_SHORT: &str = "@%#*+=-:. ";

/// An ordered set of glyphs representing quantized brightness levels
///
/// Index 0 stands for the darkest block average, the last index for the
/// lightest. Invariant: at least two glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<char>,
}

impl GlyphPalette {
    /// Create a palette from a ramp string, darkest glyph first
    ///
    /// # Errors
    ///
    /// Returns an error if the ramp holds fewer than two glyphs
    pub fn new(ramp: &str) -> Result<Self> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.len() < 2 {
            return Err(invalid_parameter(
                "palette",
                &ramp,
                &"palette needs at least 2 glyphs",
            ));
        }
        Ok(Self { glyphs })
    }

    /// The extended 69-glyph grayscale palette
    pub fn full() -> Self {
        Self {
            glyphs: PALETTE_FULL.chars().collect(),
        }
    }

    /// The compact 10-glyph grayscale palette
    pub fn short() -> Self {
        Self {
            glyphs: PALETTE_SHORT.chars().collect(),
        }
    }

    /// Number of glyphs in the palette
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the palette holds no glyphs (never true for a constructed one)
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Quantize an average luminance in `[0, 255]` to a palette index
    ///
    /// `index = floor(avg / 255 * (len - 1))`, clamped into range. The clamp
    /// matters when floating-point rounding pushes a pure-white average a
    /// hair past the last level
    pub fn quantize_index(&self, avg: f64) -> usize {
        let levels = self.glyphs.len().saturating_sub(1);
        let index = ((avg / 255.0) * levels as f64).floor();
        if index.is_sign_negative() {
            return 0;
        }
        (index as usize).min(levels)
    }

    /// Quantize an average luminance in `[0, 255]` to a glyph
    pub fn quantize(&self, avg: f64) -> char {
        self.glyphs
            .get(self.quantize_index(avg))
            .copied()
            .unwrap_or(' ')
    }
}
