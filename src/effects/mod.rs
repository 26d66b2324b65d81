//! Post-processing distortions applied to the finished glyph raster.

/// Random-weight 3x3 convolution.
pub mod blur;
/// Ordered list of enabled stages.
pub mod pipeline;
/// Sine-wave horizontal displacement.
pub mod ripple;
