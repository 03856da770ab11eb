//! Fractal noise field sampling on a square grid
//!
//! Gradient noise itself comes from `noise_perlin`; this module only stacks
//! octaves, derives per-octave offsets from the seed, and normalizes the
//! result into `[-1, 1]`.

use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;
use noise_perlin::perlin_2d;

// Raw perlin_2d output spans roughly [-sqrt(2)/2, sqrt(2)/2]
const AMPLITUDE_NORM: f32 = std::f32::consts::SQRT_2;

/// A deterministic fractal noise field
///
/// Octaves add detail at doubling frequency and halving amplitude; the seed
/// decorrelates fields by shifting each octave's sample coordinates
#[derive(Debug, Clone, Copy)]
pub struct NoiseField {
    octaves: u32,
    seed: u32,
    frequency: f32,
}

impl NoiseField {
    /// Create a field configuration
    ///
    /// # Errors
    ///
    /// Returns an error for a zero octave count or a non-positive or
    /// non-finite base frequency
    pub fn new(octaves: u32, seed: u32, frequency: f32) -> Result<Self> {
        if octaves == 0 {
            return Err(invalid_parameter(
                "octaves",
                &octaves,
                &"octave count must be at least 1",
            ));
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &frequency,
                &"base frequency must be a positive finite number",
            ));
        }
        Ok(Self {
            octaves,
            seed,
            frequency,
        })
    }

    /// Octave count
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Seed
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at normalized coordinates, clamped to `[-1, 1]`
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let mut sum = 0.0f32;
        let mut total_amplitude = 0.0f32;
        let mut amplitude = 1.0f32;
        let mut frequency = self.frequency;

        for octave in 0..self.octaves {
            let (ox, oy) = self.octave_offset(octave);
            sum += amplitude * perlin_2d(x.mul_add(frequency, ox), y.mul_add(frequency, oy));
            total_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        ((sum * AMPLITUDE_NORM) / total_amplitude).clamp(-1.0, 1.0)
    }

    // Integer hash of (seed, octave) spread over [0, 256) per axis, so every
    // octave and every seed reads a different region of the gradient lattice
    fn octave_offset(&self, octave: u32) -> (f32, f32) {
        let mut h = u64::from(self.seed)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(u64::from(octave).wrapping_mul(0xBF58_476D_1CE4_E5B9));
        h ^= h >> 31;
        h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^= h >> 29;
        let ox = (h & 0xFFFF) as f32 / 256.0;
        let oy = ((h >> 16) & 0xFFFF) as f32 / 256.0;
        (ox, oy)
    }

    /// Render a `size x size` field with coordinates normalized by `size`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn render(&self, size: usize) -> Result<Array2<f32>> {
        self.render_at(size, 0.0)
    }

    /// Render with an additional coordinate shift (the animation time axis)
    ///
    /// Successive frames pan diagonally through the field by increasing
    /// `shift`, which keeps each frame as cheap as a static render
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn render_at(&self, size: usize, shift: f32) -> Result<Array2<f32>> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"field size must be at least 1",
            ));
        }
        let denom = size as f32;
        Ok(Array2::from_shape_fn((size, size), |(i, j)| {
            self.sample(i as f32 / denom + shift, j as f32 / denom + shift)
        }))
    }
}
