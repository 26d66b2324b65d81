//! Cage draws distorted text images ("captchas"): easy for a person to read, awkward for
//! character recognition.
//!
//! # Pipeline
//!
//! 1. **Shape**: a [`GlyphShaper`] turns `(font, text)` into per-glyph outlines and positions.
//! 2. **Layout**: glyphs are rotated and re-spaced with random overlap, then the run is scaled
//!    into the canvas with random margins.
//! 3. **Draw**: an optional jittered outline, then the filled run, rasterized by `vello_cpu`.
//! 4. **Post-process**: optional sine ripple, then optional random 3x3 blur.
//!
//! All randomness flows through an explicit generator. A [`Painter`] built with a seed produces
//! the same sequence of images on every run.
//!
//! ```no_run
//! use cage::{Font, Painter, RenderConfig, Rgba8};
//!
//! # fn main() -> cage::CageResult<()> {
//! let font = Font::from_path(std::path::Path::new("DejaVuSans.ttf"), 40.0)?;
//! let painter = Painter::new(RenderConfig::default().with_seed(Some(7)))?;
//! let image = painter.draw(&font, Rgba8::BLACK, "AB4f")?;
//! assert_eq!(image.dimensions(), (200, 70));
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod config;
mod effects;
mod foundation;
mod layout;
mod painter;
mod render;
mod text;

pub use config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Quality, RenderConfig};
pub use effects::blur::BlurKernel;
pub use effects::pipeline::{PostProcess, Stage, StageContext};
pub use effects::ripple::RippleParams;
pub use foundation::core::{Affine, BezPath, Point, Raster, Rect, Rgba8, Vec2};
pub use foundation::error::{CageError, CageResult};
pub use foundation::random::{RandomSource, StageRng};
pub use layout::glyphs::{
    FitTransform, GlyphRun, GlyphTransform, LayoutOptions, PlacedGlyph, fit_to_canvas,
    perturb_glyphs,
};
pub use painter::Painter;
pub use render::canvas::{Canvas, STROKE_WIDTH};
pub use render::outline::{OutlineJitter, draw_outline};
pub use render::quality::{Interpolation, RenderHints, RenderSpeed};
pub use text::font::Font;
pub use text::shaper::{GlyphGeometry, GlyphShaper, SkrifaShaper};
