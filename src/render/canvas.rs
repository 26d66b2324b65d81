//! Raster collaborator backed by `vello_cpu`.
//!
//! Paths are rasterized into a transparent premultiplied glyph layer; [`Canvas::finish`]
//! composites that layer over the background into an opaque RGB raster.

use image::Rgb;
use kurbo::{Affine, BezPath, PathEl};

use crate::foundation::core::{Raster, Rgba8};
use crate::foundation::error::{CageError, CageResult};
use crate::foundation::math::mul_div255;
use crate::render::quality::RenderHints;

/// Stroke width, in user space, of outlined paths.
pub const STROKE_WIDTH: f64 = 1.0;

/// A fixed-size drawing surface owned by one draw call.
pub struct Canvas {
    width: u16,
    height: u16,
    background: Rgba8,
    foreground: Rgba8,
    antialiasing: bool,
    ctx: vello_cpu::RenderContext,
}

impl Canvas {
    /// Allocate a surface cleared to `background`, drawing in `foreground`.
    pub fn allocate(
        width: u32,
        height: u32,
        background: Rgba8,
        foreground: Rgba8,
        hints: &RenderHints,
    ) -> CageResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| CageError::internal("canvas width exceeds rasterizer limit"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| CageError::internal("canvas height exceeds rasterizer limit"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(CageError::internal("rasterizer cannot allocate an empty canvas"));
        }

        let ctx = match hints.vello_render_mode() {
            Some(render_mode) => vello_cpu::RenderContext::new_with(
                width_u16,
                height_u16,
                vello_cpu::RenderSettings {
                    render_mode,
                    ..vello_cpu::RenderSettings::default()
                },
            ),
            None => vello_cpu::RenderContext::new(width_u16, height_u16),
        };

        Ok(Self {
            width: width_u16,
            height: height_u16,
            background,
            foreground,
            antialiasing: hints.antialiasing_enabled(),
            ctx,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub fn fill_path(&mut self, path: &BezPath, transform: Affine) {
        self.prepare(transform);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Stroke with a [`STROKE_WIDTH`] pen; the pen is scaled by `transform` like the path.
    pub fn stroke_path(&mut self, path: &BezPath, transform: Affine) {
        self.prepare(transform);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(STROKE_WIDTH));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn prepare(&mut self, transform: Affine) {
        let Rgba8 { r, g, b, a } = self.foreground;
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }

    /// Rasterize everything drawn so far and composite it over the background.
    pub fn finish(mut self) -> CageResult<Raster> {
        self.ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut layer);

        let bytes = layer.data_as_u8_slice();
        let (w, h) = (u32::from(self.width), u32::from(self.height));
        if bytes.len() != w as usize * h as usize * 4 {
            return Err(CageError::internal("glyph layer size does not match canvas"));
        }

        let fg = self.foreground.to_premul();
        let bg = [self.background.r, self.background.g, self.background.b];
        let mut out = Raster::from_pixel(w, h, Rgb(bg));
        for (dst, src) in out.pixels_mut().zip(bytes.chunks_exact(4)) {
            let mut px = [src[0], src[1], src[2], src[3]];
            if !self.antialiasing {
                px = snap_coverage(px, fg);
            }
            dst.0 = over_opaque(dst.0, px);
        }
        Ok(out)
    }
}

/// Aliased rendering: a partially covered pixel is either fully painted or untouched.
fn snap_coverage(px: [u8; 4], fg_premul: [u8; 4]) -> [u8; 4] {
    if px[3] == 0 {
        return [0, 0, 0, 0];
    }
    if u16::from(px[3]) * 2 >= u16::from(fg_premul[3]) {
        fg_premul
    } else {
        [0, 0, 0, 0]
    }
}

/// Premultiplied source over an opaque destination.
pub(crate) fn over_opaque(dst: [u8; 3], src: [u8; 4]) -> [u8; 3] {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = dst;
    for (o, s) in out.iter_mut().zip(src) {
        *o = s.saturating_add(mul_div255(u16::from(*o), inv));
    }
    out
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
