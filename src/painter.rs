//! The draw orchestrator.
//!
//! A [`Painter`] owns an immutable [`RenderConfig`] and the [`RandomSource`] shared by every
//! draw call made on it. One call runs: validate inputs, shape the text, allocate the canvas,
//! perturb and fit the glyph run, draw the optional outline, fill the run, then hand the raster
//! to the post-processing stages.

use rand::Rng;

use crate::config::{Quality, RenderConfig};
use crate::effects::pipeline::{PostProcess, StageContext};
use crate::foundation::core::{Raster, Rgba8};
use crate::foundation::error::{CageError, CageResult};
use crate::foundation::random::RandomSource;
use crate::layout::glyphs::{LayoutOptions, fit_to_canvas, perturb_glyphs};
use crate::render::canvas::Canvas;
use crate::render::outline::{OutlineJitter, draw_outline};
use crate::render::quality::RenderHints;
use crate::text::shaper::{GlyphShaper, SkrifaShaper};

/// Captcha renderer for a fixed configuration.
///
/// `draw` takes `&self`; a painter can be shared across threads and each call forks its own
/// generator from the shared source.
#[derive(Debug)]
pub struct Painter<S: GlyphShaper = SkrifaShaper> {
    config: RenderConfig,
    hints: RenderHints,
    post: PostProcess,
    rng: RandomSource,
    shaper: S,
}

impl Painter<SkrifaShaper> {
    /// Painter using the `skrifa` glyph shaper.
    pub fn new(config: RenderConfig) -> CageResult<Self> {
        Self::with_shaper(config, SkrifaShaper)
    }
}

impl Default for Painter<SkrifaShaper> {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            hints: RenderHints::for_quality(config.quality),
            post: PostProcess::from_config(&config),
            rng: RandomSource::from_entropy(),
            shaper: SkrifaShaper,
            config,
        }
    }
}

impl<S: GlyphShaper> Painter<S> {
    /// Painter with a custom glyph source. A configured seed makes the draw sequence reproducible.
    pub fn with_shaper(config: RenderConfig, shaper: S) -> CageResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        Ok(Self {
            hints: RenderHints::for_quality(config.quality),
            post: PostProcess::from_config(&config),
            rng,
            shaper,
            config,
        })
    }

    /// Replace the shared random source.
    pub fn with_random_source(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }

    /// Override the hint bundle derived from the quality level.
    pub fn with_hints(mut self, hints: RenderHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn hints(&self) -> &RenderHints {
        &self.hints
    }

    pub fn shaper(&self) -> &S {
        &self.shaper
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn background(&self) -> Rgba8 {
        self.config.background
    }

    pub fn quality(&self) -> Quality {
        self.config.quality
    }

    pub fn is_ripple_enabled(&self) -> bool {
        self.config.ripple
    }

    pub fn is_blur_enabled(&self) -> bool {
        self.config.blur
    }

    pub fn is_outline_enabled(&self) -> bool {
        self.config.outline
    }

    pub fn is_rotate_enabled(&self) -> bool {
        self.config.rotate
    }

    /// Render `text` in `foreground` and return a freshly allocated `width x height` raster.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            text_len = text.chars().count(),
            width = self.config.width,
            height = self.config.height
        )
    )]
    pub fn draw(&self, font: &S::Font, foreground: Rgba8, text: &str) -> CageResult<Raster> {
        let mut rng = self.rng.fork();
        self.draw_with_rng(&mut rng, font, foreground, text)
    }

    /// Like [`Painter::draw`], drawing every random choice from `rng` instead of the shared source.
    pub fn draw_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        font: &S::Font,
        foreground: Rgba8,
        text: &str,
    ) -> CageResult<Raster> {
        self.shaper.check_font(font)?;
        if foreground.is_transparent() {
            return Err(CageError::invalid_argument(
                "foreground colour must not be fully transparent",
            ));
        }
        if text.is_empty() {
            return Err(CageError::invalid_argument("text must not be empty"));
        }

        let glyphs = self.shaper.shape(font, text)?;
        let (width, height) = (self.config.width, self.config.height);
        let mut canvas = Canvas::allocate(
            width,
            height,
            self.config.background,
            foreground,
            &self.hints,
        )?;

        let run = perturb_glyphs(
            rng,
            &glyphs,
            LayoutOptions {
                rotate: self.config.rotate,
                outline: self.config.outline,
                fractional_metrics: self.hints.fractional_metrics_enabled(),
            },
        )?;
        let fit = fit_to_canvas(rng, run.bounds(), width, height, self.config.outline);
        tracing::debug!(
            glyphs = run.len(),
            scale_x = fit.scale.x,
            scale_y = fit.scale.y,
            "fit run to canvas"
        );

        let path = run.to_path();
        let transform = fit.to_affine();
        if self.config.outline {
            let jitter = OutlineJitter::random(rng, width, height);
            draw_outline(&mut canvas, &path, transform, jitter);
        }
        canvas.fill_path(&path, transform);
        let raster = canvas.finish()?;

        let ctx = StageContext::new(self.config.background, &self.hints);
        Ok(self.post.run(rng, raster, &ctx))
    }
}

#[cfg(test)]
#[path = "../tests/unit/painter.rs"]
mod tests;
