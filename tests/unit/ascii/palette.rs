//! Tests for glyph palette construction and luminance quantization

#[cfg(test)]
mod tests {
    use glyphpage::ascii::palette::{GlyphPalette, PALETTE_FULL, PALETTE_SHORT};

    #[test]
    fn test_builtin_palettes_match_reference_ramps() {
        assert_eq!(PALETTE_SHORT.chars().count(), 10);
        assert_eq!(PALETTE_FULL.chars().count(), 69);

        // Darkest first, space last
        assert_eq!(PALETTE_SHORT.chars().next(), Some('@'));
        assert_eq!(PALETTE_SHORT.chars().last(), Some(' '));
        assert_eq!(PALETTE_FULL.chars().next(), Some('&'));
        assert_eq!(PALETTE_FULL.chars().last(), Some(' '));

        assert_eq!(GlyphPalette::short().len(), 10);
        assert_eq!(GlyphPalette::full().len(), 69);
    }

    #[test]
    fn test_quantize_boundaries() {
        let palette = GlyphPalette::short();

        // avg 0 maps to the darkest glyph, avg 255 to the lightest
        assert_eq!(palette.quantize(0.0), '@');
        assert_eq!(palette.quantize(255.0), ' ');

        assert_eq!(palette.quantize_index(0.0), 0);
        assert_eq!(palette.quantize_index(255.0), 9);
    }

    #[test]
    fn test_quantize_is_monotonic() {
        let palette = GlyphPalette::short();
        let mut previous = 0;
        for avg in 0..=255 {
            let index = palette.quantize_index(f64::from(avg));
            assert!(
                index >= previous,
                "index decreased at avg={avg}: {index} < {previous}"
            );
            previous = index;
        }
    }

    #[test]
    fn test_quantize_clamps_out_of_range_averages() {
        let palette = GlyphPalette::short();

        // Floating-point drift past pure white must not index out of bounds
        assert_eq!(palette.quantize_index(255.2), 9);
        assert_eq!(palette.quantize_index(1000.0), 9);
        assert_eq!(palette.quantize_index(-3.0), 0);
    }

    #[test]
    fn test_quantize_uses_floor_not_round() {
        let palette = GlyphPalette::new("ab").expect("two-glyph palette");

        // levels = 1; index = floor(avg / 255); everything below 255 floors to 0
        assert_eq!(palette.quantize(254.9), 'a');
        assert_eq!(palette.quantize(255.0), 'b');
    }

    #[test]
    fn test_custom_palette_requires_two_glyphs() {
        assert!(GlyphPalette::new("").is_err());
        assert!(GlyphPalette::new("x").is_err());
        assert!(GlyphPalette::new("x ").is_ok());
    }
}
