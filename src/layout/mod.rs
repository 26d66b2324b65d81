//! Glyph placement: perturbed per-glyph transforms and the fit-to-canvas transform.

/// Per-glyph rotation/position perturbation and canvas fitting.
pub mod glyphs;
