//! Wave warp: every row is shifted horizontally by a sine of its vertical position.
//!
//! Destination pixel `(x, y)` samples the source at `(x + d(y), y)` with
//! `d(y) = amplitude * sin(phase + y * period / height)`. Samples that fall outside the source
//! leave the destination at its fill colour; nothing is clamped or wrapped.

use std::f64::consts::PI;

use image::Rgb;
use rand::Rng;

use crate::foundation::core::Raster;
use crate::render::quality::Interpolation;

/// Parameters fully determining one ripple application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleParams {
    /// Phase offset in `[0, 2π)`.
    pub phase: f64,
    /// Angular period across the image height, in `[π, 4π)`.
    pub period: f64,
    /// Peak horizontal displacement in pixels.
    pub amplitude: f64,
}

impl RippleParams {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, height: u32) -> Self {
        let phase = rng.random::<f64>() * 2.0 * PI;
        let period = (1.0 + rng.random::<f64>() * 3.0) * PI;
        Self {
            phase,
            period,
            amplitude: f64::from(height) / 10.0,
        }
    }

    /// Horizontal displacement for row `y` of an image `height` pixels tall.
    pub fn displacement(&self, y: u32, height: u32) -> f64 {
        self.amplitude * (self.phase + f64::from(y) * self.period / f64::from(height)).sin()
    }

    /// Warp `src` into a fresh raster of the same size pre-filled with `fill`.
    pub fn apply(&self, src: &Raster, fill: Rgb<u8>, interpolation: Interpolation) -> Raster {
        let (w, h) = src.dimensions();
        let mut dst = Raster::from_pixel(w, h, fill);

        for y in 0..h {
            let d = self.displacement(y, h);
            if d == 0.0 {
                for x in 0..w {
                    dst.put_pixel(x, y, *src.get_pixel(x, y));
                }
                continue;
            }

            for x in 0..w {
                let sx = f64::from(x) + d;
                if let Some(px) = sample_row(src, y, sx, interpolation) {
                    dst.put_pixel(x, y, px);
                }
            }
        }
        dst
    }
}

/// Sample row `y` at fractional column `sx`; `None` when `sx` lies outside the row.
fn sample_row(src: &Raster, y: u32, sx: f64, interpolation: Interpolation) -> Option<Rgb<u8>> {
    let max_x = f64::from(src.width()) - 1.0;
    if interpolation == Interpolation::NearestNeighbor {
        let nx = (sx + 0.5).floor();
        if nx < 0.0 || nx > max_x {
            return None;
        }
        return Some(*src.get_pixel(nx as u32, y));
    }

    if !(0.0..=max_x).contains(&sx) {
        return None;
    }
    let x0 = sx.floor();
    let t = sx - x0;
    let x0 = x0 as u32;
    if t == 0.0 {
        return Some(*src.get_pixel(x0, y));
    }

    let tap = |dx: i64| -> [f64; 3] {
        let x = (i64::from(x0) + dx).clamp(0, i64::from(src.width()) - 1) as u32;
        src.get_pixel(x, y).0.map(f64::from)
    };
    let weights = match interpolation {
        Interpolation::Bicubic => catmull_rom_weights(t),
        _ => [0.0, 1.0 - t, t, 0.0],
    };
    let taps = [tap(-1), tap(0), tap(1), tap(2)];

    let mut out = [0u8; 3];
    for (c, slot) in out.iter_mut().enumerate() {
        let v: f64 = taps.iter().zip(weights).map(|(p, w)| p[c] * w).sum();
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    Some(Rgb(out))
}

fn catmull_rom_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t3 + 2.0 * t2 - t),
        0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
        0.5 * (-3.0 * t3 + 4.0 * t2 + t),
        0.5 * (t3 - t2),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ripple.rs"]
mod tests;
