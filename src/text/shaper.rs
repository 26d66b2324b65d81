//! The font collaborator: turns `(font, text)` into per-glyph geometry.
//!
//! Coordinates are raster-oriented (y grows downwards) with the baseline at `y = 0`.

use kurbo::{BezPath, Point, Rect, Shape};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{GlyphId, MetadataProvider};

use crate::foundation::error::{CageError, CageResult};
use crate::text::font::Font;

/// Geometry of one glyph as produced by a shaper.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphGeometry {
    /// Outline relative to the glyph origin.
    pub outline: BezPath,
    /// Nominal pen position of the glyph origin.
    pub position: Point,
    /// Outline bounds placed at `position`.
    pub visual_bounds: Rect,
}

impl GlyphGeometry {
    /// Build geometry from an origin-relative outline, deriving the visual bounds.
    pub fn new(outline: BezPath, position: Point) -> Self {
        let visual_bounds = if outline.elements().is_empty() {
            Rect::from_origin_size(position, (0.0, 0.0))
        } else {
            outline.bounding_box() + position.to_vec2()
        };
        Self {
            outline,
            position,
            visual_bounds,
        }
    }
}

/// Source of glyph geometry for a font handle.
pub trait GlyphShaper {
    /// Font handle understood by this shaper.
    type Font;

    /// Reject a font that cannot be drawn with at all.
    fn check_font(&self, font: &Self::Font) -> CageResult<()>;

    /// One [`GlyphGeometry`] per glyph, in visual left-to-right order.
    fn shape(&self, font: &Self::Font, text: &str) -> CageResult<Vec<GlyphGeometry>>;
}

/// Shaper backed by `skrifa`: cmap lookup, `hmtx` advances and unhinted outlines.
///
/// No kerning or complex-script shaping is applied; each `char` yields one glyph.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkrifaShaper;

impl GlyphShaper for SkrifaShaper {
    type Font = Font;

    /// Always accepts: `Font` rejects empty data, unparsable faces and bad sizes when built.
    fn check_font(&self, _font: &Font) -> CageResult<()> {
        Ok(())
    }

    fn shape(&self, font: &Font, text: &str) -> CageResult<Vec<GlyphGeometry>> {
        let font_ref = font.font_ref()?;
        let size = Size::new(font.size());
        let location = LocationRef::default();
        let charmap = font_ref.charmap();
        let metrics = font_ref.glyph_metrics(size, location);
        let outlines = font_ref.outline_glyphs();

        let mut out = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f64;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);

            let mut pen = BezPathPen::default();
            if let Some(glyph) = outlines.get(glyph_id) {
                glyph
                    .draw(DrawSettings::unhinted(size, location), &mut pen)
                    .map_err(|e| CageError::font(format!("draw outline for {ch:?}: {e}")))?;
            }

            out.push(GlyphGeometry::new(pen.path, Point::new(pen_x, 0.0)));
            pen_x += f64::from(metrics.advance_width(glyph_id).unwrap_or(0.0));
        }
        Ok(out)
    }
}

/// Records skrifa outline commands into a `BezPath`, flipping y into raster space.
#[derive(Default)]
struct BezPathPen {
    path: BezPath,
}

fn flip(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), -f64::from(y))
}

impl OutlinePen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(flip(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(flip(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(flip(cx0, cy0), flip(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(flip(cx0, cy0), flip(cx1, cy1), flip(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
