//! Shared utilities: easing curves and vector helpers.

pub mod easing;
/// Interpolation, validation, and bounding-box helpers.
pub mod math;
