//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; no runtime knobs. Comparisons are absolute, so inputs
//!   are expected at O(1)..O(1e3) scales.

/// Absolute tolerance for side, radius, midpoint and area comparisons.
pub const EPS: f64 = 1e-6;
