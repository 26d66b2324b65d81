//! Random 3x3 convolution blur.
//!
//! The kernel holds nine uniform weights normalized to sum to one, so overall brightness is
//! preserved. Pixels within one pixel of the image edge have no full neighbourhood and are
//! copied unchanged.

use rand::Rng;

use crate::foundation::core::Raster;
use crate::foundation::error::{CageError, CageResult};

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurKernel {
    weights: [f32; 9],
}

impl BlurKernel {
    /// Draw nine uniform weights in row-major order and normalize them.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut weights = [0f32; 9];
        for w in &mut weights {
            *w = rng.random::<f32>();
        }
        Self::normalized(weights)
    }

    /// Build a kernel from explicit weights; they are normalized to sum to one.
    pub fn from_weights(weights: [f32; 9]) -> CageResult<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(CageError::invalid_argument(
                "kernel weights must be finite and non-negative",
            ));
        }
        Ok(Self::normalized(weights))
    }

    fn normalized(mut weights: [f32; 9]) -> Self {
        let sum: f32 = weights.iter().sum();
        if sum > 0.0 {
            for w in &mut weights {
                *w /= sum;
            }
        } else {
            weights = [1.0 / 9.0; 9];
        }
        Self { weights }
    }

    pub fn weights(&self) -> &[f32; 9] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Convolve `src` into a new raster of the same size.
    pub fn apply(&self, src: &Raster, dithering: bool) -> Raster {
        let (w, h) = src.dimensions();
        let mut dst = src.clone();
        if w < 3 || h < 3 {
            return dst;
        }

        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let mut acc = [0f32; 3];
                for (k, weight) in self.weights.iter().enumerate() {
                    let sx = x + (k % 3) as u32 - 1;
                    let sy = y + (k / 3) as u32 - 1;
                    for (a, p) in acc.iter_mut().zip(src.get_pixel(sx, sy).0) {
                        *a += weight * f32::from(p);
                    }
                }

                let threshold = if dithering {
                    (f32::from(BAYER_4X4[(y % 4) as usize][(x % 4) as usize]) + 0.5) / 16.0
                } else {
                    0.5
                };
                for (o, a) in dst.get_pixel_mut(x, y).0.iter_mut().zip(acc) {
                    *o = (a + threshold).floor().clamp(0.0, 255.0) as u8;
                }
            }
        }
        dst
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
