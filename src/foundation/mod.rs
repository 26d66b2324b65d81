//! Shared building blocks: colours, errors, small math helpers and randomness.

/// Colour and geometry types.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Fixed-point and sign helpers.
pub mod math;
/// Seedable randomness shared by a painter.
pub mod random;
