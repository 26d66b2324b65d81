use image::Rgb;
use rand::Rng;

use crate::config::RenderConfig;
use crate::effects::blur::BlurKernel;
use crate::effects::ripple::RippleParams;
use crate::foundation::core::{Raster, Rgba8};
use crate::render::quality::{Interpolation, RenderHints};

/// One post-processing step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Ripple,
    Blur,
}

/// Per-call inputs shared by every stage.
#[derive(Clone, Copy, Debug)]
pub struct StageContext {
    pub background: Rgba8,
    pub interpolation: Interpolation,
    pub dithering: bool,
}

impl StageContext {
    pub fn new(background: Rgba8, hints: &RenderHints) -> Self {
        Self {
            background,
            interpolation: hints.interpolation_or_default(),
            dithering: hints.dithering_enabled(),
        }
    }

    fn fill(&self) -> Rgb<u8> {
        Rgb([self.background.r, self.background.g, self.background.b])
    }
}

/// Enabled stages in application order: ripple, then blur.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostProcess {
    stages: Vec<Stage>,
}

impl PostProcess {
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut stages = Vec::with_capacity(2);
        if config.ripple {
            stages.push(Stage::Ripple);
        } else {
            tracing::debug!("ripple stage disabled");
        }
        if config.blur {
            stages.push(Stage::Blur);
        } else {
            tracing::debug!("blur stage disabled");
        }
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage in order. Each stage draws its random parameters from `rng` when it runs,
    /// so disabled stages consume nothing.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mut raster: Raster,
        ctx: &StageContext,
    ) -> Raster {
        for stage in &self.stages {
            raster = match stage {
                Stage::Ripple => {
                    let params = RippleParams::random(rng, raster.height());
                    tracing::debug!(
                        phase = params.phase,
                        period = params.period,
                        amplitude = params.amplitude,
                        "ripple"
                    );
                    params.apply(&raster, ctx.fill(), ctx.interpolation)
                }
                Stage::Blur => {
                    let kernel = BlurKernel::random(rng);
                    tracing::debug!(sum = kernel.sum(), "blur kernel");
                    kernel.apply(&raster, ctx.dithering)
                }
            };
        }
        raster
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;
