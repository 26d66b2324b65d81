//! Quality level to rasterization hint bundles.
//!
//! Hints only change smoothness and speed; no geometric decision depends on them.

use crate::config::Quality;

/// Resampling used when a stage reads a source pixel at a fractional coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpolation {
    NearestNeighbor,
    Bilinear,
    Bicubic,
}

/// Rasterizer speed/quality trade-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderSpeed {
    Speed,
    Quality,
}

/// A bundle of optional rasterization hints. `None` defers to the backend default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHints {
    pub antialiasing: Option<bool>,
    pub fractional_metrics: Option<bool>,
    pub interpolation: Option<Interpolation>,
    pub dithering: Option<bool>,
    pub render_speed: Option<RenderSpeed>,
}

impl RenderHints {
    /// Every hint left to the backend.
    pub const UNSET: Self = Self {
        antialiasing: None,
        fractional_metrics: None,
        interpolation: None,
        dithering: None,
        render_speed: None,
    };

    pub const FASTEST: Self = Self {
        antialiasing: Some(false),
        fractional_metrics: Some(false),
        interpolation: Some(Interpolation::NearestNeighbor),
        dithering: Some(false),
        render_speed: Some(RenderSpeed::Speed),
    };

    pub const BEST: Self = Self {
        antialiasing: Some(true),
        fractional_metrics: Some(true),
        interpolation: Some(Interpolation::Bicubic),
        dithering: Some(true),
        render_speed: Some(RenderSpeed::Quality),
    };

    pub fn for_quality(quality: Quality) -> Self {
        match quality {
            Quality::Min => Self::FASTEST,
            Quality::Default => Self::UNSET,
            Quality::Max => Self::BEST,
        }
    }

    pub fn antialiasing_enabled(&self) -> bool {
        self.antialiasing.unwrap_or(true)
    }

    pub fn fractional_metrics_enabled(&self) -> bool {
        self.fractional_metrics.unwrap_or(true)
    }

    pub fn interpolation_or_default(&self) -> Interpolation {
        self.interpolation.unwrap_or(Interpolation::NearestNeighbor)
    }

    pub fn dithering_enabled(&self) -> bool {
        self.dithering.unwrap_or(false)
    }

    pub(crate) fn vello_render_mode(&self) -> Option<vello_cpu::RenderMode> {
        self.render_speed.map(|speed| match speed {
            RenderSpeed::Speed => vello_cpu::RenderMode::OptimizeSpeed,
            RenderSpeed::Quality => vello_cpu::RenderMode::OptimizeQuality,
        })
    }
}

impl Default for RenderHints {
    fn default() -> Self {
        Self::UNSET
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/quality.rs"]
mod tests;
