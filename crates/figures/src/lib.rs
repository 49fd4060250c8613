//! Regular figures in the plane and a small growable container for them.
//!
//! Layout
//! - `point`: 2D value type over a generic scalar (`Coord`).
//! - `geom`: pure polygon routines (centroid, shoelace area, rotation-invariant
//!   vertex equality) and the regularity predicates used by validation.
//! - `figure`: the `Shape` capability, the three variants and the closed
//!   `Figure` enum.
//! - `array`: doubling array holding figures by value or by shared handle.
//! - `sample`: reproducible generator of valid figures (tests, benches, CLI).

pub mod array;
pub mod figure;
pub mod geom;
pub mod point;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use array::{Array, FigureArray, IndexOutOfRange, SharedFigureArray};
pub use figure::{Figure, FigureKind, Hexagon, InvalidShapeError, Pentagon, Reason, Rhombus, Shape};
pub use point::{Coord, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::{Array, FigureArray, IndexOutOfRange, SharedFigureArray};
    pub use crate::figure::{
        Figure, FigureKind, Hexagon, InvalidShapeError, Pentagon, Reason, Rhombus, Shape,
    };
    pub use crate::point::{Coord, Point};
    pub use crate::sample::{
        draw_figure, regular_vertices, rhombus_vertices, ReplayToken, SampleCfg, SampleError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
