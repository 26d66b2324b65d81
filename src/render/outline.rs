use kurbo::{Affine, BezPath, Vec2};
use rand::Rng;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::foundation::math::sign;
use crate::render::canvas::Canvas;

/// Offset of the outline relative to the filled run, in pre-fit run units.
///
/// One unit per axis at the 200x70 reference size, scaled proportionally for other canvases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineJitter {
    pub offset: Vec2,
}

impl OutlineJitter {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, canvas_width: u32, canvas_height: u32) -> Self {
        let dx = sign(f64::from(rng.random::<f32>() - 0.5)) * f64::from(canvas_width)
            / f64::from(DEFAULT_WIDTH);
        let dy = sign(f64::from(rng.random::<f32>() - 0.5)) * f64::from(canvas_height)
            / f64::from(DEFAULT_HEIGHT);
        Self {
            offset: Vec2::new(dx, dy),
        }
    }
}

/// Stroke the jittered run outline; call before filling the run so it reads as a halo.
pub fn draw_outline(canvas: &mut Canvas, run_path: &BezPath, fit: Affine, jitter: OutlineJitter) {
    canvas.stroke_path(run_path, fit * Affine::translate(jitter.offset));
}

#[cfg(test)]
#[path = "../../tests/unit/render/outline.rs"]
mod tests;
