//! Piecewise-linear colormaps for scalar field visualization

use image::{Rgba, RgbaImage};
use ndarray::Array2;

// Anchor colors sampled from matplotlib's inferno at even intervals
const INFERNO_ANCHORS: &[[u8; 3]] = &[
    [0, 0, 4],
    [40, 11, 84],
    [101, 21, 110],
    [159, 42, 99],
    [212, 72, 66],
    [245, 125, 21],
    [250, 193, 39],
    [252, 255, 164],
];

/// Maps scalars in `[-1, 1]` to RGB by linear interpolation between fixed
/// anchor colors
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    anchors: &'static [[u8; 3]],
}

impl Colormap {
    /// The inferno preset, dark violet through yellow
    pub const fn inferno() -> Self {
        Self {
            anchors: INFERNO_ANCHORS,
        }
    }

    /// Map a scalar in `[-1, 1]` to RGB; out-of-range and NaN values clamp
    /// to the dark end
    pub fn map(&self, value: f32) -> [u8; 3] {
        let t = if value.is_nan() {
            0.0
        } else {
            ((value + 1.0) / 2.0).clamp(0.0, 1.0)
        };
        let segments = self.anchors.len().saturating_sub(1);
        if segments == 0 {
            return self.anchors.first().copied().unwrap_or([0, 0, 0]);
        }
        let scaled = t * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let frac = scaled - index as f32;

        let low = self.anchors.get(index).copied().unwrap_or([0, 0, 0]);
        let high = self.anchors.get(index + 1).copied().unwrap_or(low);

        let mut rgb = [0u8; 3];
        for (out, (&a, &b)) in rgb.iter_mut().zip(low.iter().zip(high.iter())) {
            *out = frac.mul_add(f32::from(b) - f32::from(a), f32::from(a)).round() as u8;
        }
        rgb
    }
}

/// Render a scalar field to an opaque RGBA image through a colormap
///
/// Row index maps to the pixel row, matching the field's row-major layout
pub fn field_to_image(field: &Array2<f32>, colormap: &Colormap) -> RgbaImage {
    let rows = field.nrows();
    let cols = field.ncols();
    RgbaImage::from_fn(cols as u32, rows as u32, |x, y| {
        let value = field.get((y as usize, x as usize)).copied().unwrap_or(0.0);
        let [r, g, b] = colormap.map(value);
        Rgba([r, g, b, 255])
    })
}
