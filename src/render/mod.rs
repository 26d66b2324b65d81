//! Drawing surface, quality hints and the outline stage.

/// CPU canvas: glyph layer rasterization and background compositing.
pub mod canvas;
/// Jittered glyph-run outline drawn behind the fill.
pub mod outline;
/// Quality level to hint bundle mapping.
pub mod quality;
