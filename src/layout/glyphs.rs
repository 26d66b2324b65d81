use std::f64::consts::PI;

use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};
use rand::Rng;

use crate::foundation::error::{CageError, CageResult};
use crate::foundation::math::sign;
use crate::text::shaper::GlyphGeometry;

/// Probability that the rotation step flips direction after each glyph.
const ROTATION_FLIP_PROBABILITY: f64 = 0.25;
/// Random share of the narrower glyph width added to the base overlap.
const OVERLAP_JITTER: f64 = 0.15;
const OVERLAP_ROTATED: f64 = 0.20;
const OVERLAP_UPRIGHT: f64 = 0.15;

/// Switches that change how glyphs are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    pub rotate: bool,
    /// Leaves vertical headroom for the outline stroke when fitting.
    pub outline: bool,
    /// When false, nominal advance positions are snapped to whole pixels.
    pub fractional_metrics: bool,
}

/// Rotation about the glyph origin followed by placement at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphTransform {
    pub rotation: f64,
    pub position: Point,
}

impl GlyphTransform {
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation)
    }
}

/// One glyph after perturbation, in run coordinates.
#[derive(Clone, Debug)]
pub struct PlacedGlyph {
    pub transform: GlyphTransform,
    pub outline: BezPath,
    pub visual_bounds: Rect,
}

/// The whole perturbed glyph run.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    glyphs: Vec<PlacedGlyph>,
}

impl GlyphRun {
    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Union of the placed glyphs' visual bounds.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.glyphs.iter().map(|g| g.visual_bounds);
        let first = iter.next().unwrap_or(Rect::ZERO);
        iter.fold(first, |acc, r| acc.union(r))
    }

    /// All placed outlines combined into one path.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for el in self.glyphs.iter().flat_map(|g| g.outline.elements()) {
            path.push(*el);
        }
        path
    }
}

/// Maps run coordinates into canvas pixels: `translate * scale * translate(-origin)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Top-left corner of the run's whole-pixel bounds.
    pub origin: Point,
    /// Whole-pixel size of the run.
    pub run_size: Vec2,
    pub scale: Vec2,
    pub translate: Vec2,
}

impl FitTransform {
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-self.origin.to_vec2())
    }
}

/// Rotate and re-space every glyph.
///
/// The first glyph's visual left edge is moved to its nominal x. Each later glyph starts at the
/// previous glyph's visual right edge minus an overlap proportional to the narrower of the two.
pub fn perturb_glyphs<R: Rng + ?Sized>(
    rng: &mut R,
    glyphs: &[GlyphGeometry],
    opts: LayoutOptions,
) -> CageResult<GlyphRun> {
    if glyphs.is_empty() {
        return Err(CageError::invalid_argument(
            "text must produce at least one glyph",
        ));
    }
    let count = glyphs.len() as f64;

    let mut rotation = (rng.random::<f64>() - 0.5) * PI / 8.0;
    let mut step = sign(rotation) * (rng.random::<f64>() * PI / 2.0 / count);
    let base_overlap = if opts.rotate {
        OVERLAP_ROTATED
    } else {
        OVERLAP_UPRIGHT
    };

    let mut placed: Vec<PlacedGlyph> = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        let mut angle = 0.0;
        if opts.rotate {
            angle = rotation;
            if rng.random::<f64>() < ROTATION_FLIP_PROBABILITY {
                step = -step;
            }
            rotation += step;
        }

        let nominal = if opts.fractional_metrics {
            glyph.position
        } else {
            Point::new(glyph.position.x.round(), glyph.position.y.round())
        };

        let local = if glyph.outline.elements().is_empty() {
            Rect::ZERO
        } else {
            (Affine::rotate(angle) * glyph.outline.clone()).bounding_box()
        };
        let bounds = local + nominal.to_vec2();

        let x = match placed.last() {
            None => nominal.x - bounds.x0,
            Some(prev) => {
                let overlap = prev.visual_bounds.width().min(bounds.width())
                    * (rng.random::<f64>() * OVERLAP_JITTER + base_overlap);
                prev.visual_bounds.x1 + nominal.x - bounds.x0 - overlap
            }
        };
        let transform = GlyphTransform {
            rotation: angle,
            position: Point::new(x, nominal.y),
        };
        let outline = transform.to_affine() * glyph.outline.clone();
        let visual_bounds = local + transform.position.to_vec2();

        placed.push(PlacedGlyph {
            transform,
            outline,
            visual_bounds,
        });
    }

    Ok(GlyphRun { glyphs: placed })
}

/// Scale and centre the run inside the canvas with randomized margins.
pub fn fit_to_canvas<R: Rng + ?Sized>(
    rng: &mut R,
    run_bounds: Rect,
    canvas_width: u32,
    canvas_height: u32,
    outline: bool,
) -> FitTransform {
    let x0 = run_bounds.x0.floor();
    let y0 = run_bounds.y0.floor();
    let bw = (run_bounds.x1.ceil() - x0).max(1.0);
    let bh = (run_bounds.y1.ceil() - y0).max(1.0);
    let (w, h) = (f64::from(canvas_width), f64::from(canvas_height));

    let width_margin = f64::from(rng.random::<f32>() / 2.5 + 0.5);
    let height_base = if outline { 0.45 } else { 0.55 };
    let height_margin = f64::from(rng.random::<f32>() / 4.0 + height_base);
    let wr = w / bw * width_margin;
    let hr = h / bh * height_margin;

    FitTransform {
        origin: Point::new(x0, y0),
        run_size: Vec2::new(bw, bh),
        scale: Vec2::new(wr, hr),
        translate: Vec2::new((w - bw * wr) / 2.0, (h - bh * hr) / 2.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyphs.rs"]
mod tests;
