//! Immutable drawing configuration shared by every stage of every draw call on a painter.

use std::path::Path;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CageError, CageResult};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 200;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 70;

/// Image quality level; selects a rasterization hint bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Favour speed: no antialiasing, nearest-neighbour sampling.
    Min,
    /// Leave every hint to the rasterizer's own default.
    Default,
    /// Favour quality: antialiasing, cubic sampling, dithering.
    #[default]
    Max,
}

impl std::str::FromStr for Quality {
    type Err = CageError;

    fn from_str(s: &str) -> CageResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "default" => Ok(Self::Default),
            "max" => Ok(Self::Max),
            other => Err(CageError::invalid_argument(format!(
                "quality must be one of min/default/max, got '{other}'"
            ))),
        }
    }
}

/// Canvas size, colours, quality and the four feature toggles.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgba8,
    pub quality: Quality,
    /// Sine-wave horizontal displacement.
    pub ripple: bool,
    /// Random 3x3 convolution.
    pub blur: bool,
    /// Jittered stroke of the glyph run drawn behind the fill.
    pub outline: bool,
    /// Independent per-glyph rotation.
    pub rotate: bool,
    /// Seed for the painter's random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Rgba8::WHITE,
            quality: Quality::Max,
            ripple: true,
            blur: true,
            outline: false,
            rotate: true,
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: Rgba8) -> Self {
        self.background = background;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_ripple(mut self, enabled: bool) -> Self {
        self.ripple = enabled;
        self
    }

    pub fn with_blur(mut self, enabled: bool) -> Self {
        self.blur = enabled;
        self
    }

    pub fn with_outline(mut self, enabled: bool) -> Self {
        self.outline = enabled;
        self
    }

    pub fn with_rotate(mut self, enabled: bool) -> Self {
        self.rotate = enabled;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject sizes the rasterizer cannot allocate.
    pub fn validate(&self) -> CageResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CageError::invalid_argument(format!(
                "width/height must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(CageError::invalid_argument(format!(
                "width/height must be <= {}, got {}x{}",
                u16::MAX,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> CageResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CageError::config(format!("parse render config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> CageResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CageError::config(format!("read render config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
