//! Polygon geometry over fixed vertex sequences.
//!
//! Purpose
//! - Pure routines shared by all figures: centroid, shoelace area, duplicate
//!   detection and rotation-invariant sequence equality.
//! - Regularity predicates used by figure validation (`checks`).
//!
//! Conventions
//! - Vertices are taken in input order; indices wrap modulo `N`.
//! - All metrics are evaluated in `f64`. Comparisons use the absolute
//!   tolerance `cfg::EPS` (not scale-relative: very large coordinates may
//!   spuriously pass or fail).

pub mod cfg;
mod checks;
mod polygon;

pub use checks::{check_regular, check_rhombus};
pub use polygon::{
    approximately_equal, centroid, centroid_vector, has_duplicate_vertices, sequences_equal,
    side_lengths, surface,
};
