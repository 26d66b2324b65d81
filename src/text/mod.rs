//! Font handles and the glyph-shaping collaborator.

/// Owned font data at a pixel size.
pub mod font;
/// Per-glyph outline, position and bounds extraction.
pub mod shaper;
