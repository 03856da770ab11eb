//! Single-channel luminance grids with mean-anchored contrast adjustment

use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, s};

/// A row-major grid of luminance samples in `[0, 255]`
///
/// Built once from a decoded image and never mutated afterwards; the block
/// sampler reads rectangular windows out of it
#[derive(Debug, Clone)]
pub struct LuminanceImage {
    samples: Array2<u8>,
}

impl LuminanceImage {
    /// Create from row-major samples
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the sample count does
    /// not equal `width * height`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"image dimensions must be non-zero",
            ));
        }
        let samples = Array2::from_shape_vec((height, width), data).map_err(|e| {
            invalid_parameter("samples", &format!("{width}x{height}"), &e.to_string())
        })?;
        Ok(Self { samples })
    }

    /// Create from a decoded grayscale image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn from_gray(img: &image::GrayImage) -> Result<Self> {
        Self::from_raw(
            img.width() as usize,
            img.height() as usize,
            img.as_raw().clone(),
        )
    }

    /// Image width in samples
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Image height in samples
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Sample at `(x, y)`, or `None` when out of bounds
    pub fn sample(&self, x: usize, y: usize) -> Option<u8> {
        self.samples.get((y, x)).copied()
    }

    /// Arithmetic mean luminance over the whole image
    pub fn mean(&self) -> f64 {
        let count = self.samples.len();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|&v| f64::from(v)).sum();
        sum / count as f64
    }

    /// Arithmetic mean over the window `[x1, x2) x [y1, y2)`
    ///
    /// Bounds past the image edge are clamped. Returns `None` when the
    /// clamped window contains no samples
    pub fn window_mean(&self, x1: usize, x2: usize, y1: usize, y2: usize) -> Option<f64> {
        let x2 = x2.min(self.width());
        let y2 = y2.min(self.height());
        if x1 >= x2 || y1 >= y2 {
            return None;
        }
        let window = self.samples.slice(s![y1..y2, x1..x2]);
        let sum: f64 = window.iter().map(|&v| f64::from(v)).sum();
        Some(sum / window.len() as f64)
    }

    /// Affine contrast rescale around the image mean
    ///
    /// Each sample becomes `mean + factor * (sample - mean)`, clamped to
    /// `[0, 255]`, with the mean rounded to the nearest integer first. A
    /// factor of 1.0 is the identity; 0.0 collapses to a solid gray
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is negative or not finite
    pub fn with_contrast(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(invalid_parameter(
                "contrast",
                &factor,
                &"contrast factor must be finite and non-negative",
            ));
        }
        let mean = self.mean().round();
        let samples = self.samples.mapv(|v| {
            let adjusted = (factor * (f64::from(v) - mean) + mean).clamp(0.0, 255.0);
            adjusted.round() as u8
        });
        Ok(Self { samples })
    }
}
