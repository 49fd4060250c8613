//! Figures: rhombus, regular pentagon, regular hexagon.
//!
//! Purpose
//! - `Shape` is the common capability (kind tag, vertices, validation, center,
//!   surface). Each variant owns a fixed inline array of points.
//! - `Figure` is the closed union over the three variants; operations dispatch
//!   by `match`, and equality across variants is always false.
//! - Shared handles (`Rc<S>`) are shapes too, so containers can hold either.
//!
//! Lifecycle
//! - `Default` gives all-zero vertices. Such a figure is not valid and must be
//!   filled by `read`/`from_str`/`from_vertices` before use.
//! - `read` either commits a fully valid vertex set or resets every vertex to
//!   zero and returns `InvalidShapeError`.
//!
//! Formats
//! - Input: `2N` whitespace-separated numbers, vertices in boundary order.
//! - Output: `"(x, y)"` pairs separated by spaces. The two formats differ;
//!   `Point::from_str` accepts both, figure parsing only the raw one.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::geom;
use crate::point::{Coord, Point};

mod dynamic;
mod error;
mod shapes;

pub use dynamic::Figure;
pub use error::{InvalidShapeError, Reason, UnknownKind};
pub use shapes::{Hexagon, Pentagon, Rhombus};

/// Name tag of a figure variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Rhombus,
    Pentagon,
    Hexagon,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [
        FigureKind::Rhombus,
        FigureKind::Pentagon,
        FigureKind::Hexagon,
    ];

    pub fn vertex_count(self) -> usize {
        match self {
            FigureKind::Rhombus => Rhombus::<f64>::VERTEX_COUNT,
            FigureKind::Pentagon => Pentagon::<f64>::VERTEX_COUNT,
            FigureKind::Hexagon => Hexagon::<f64>::VERTEX_COUNT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Rhombus => "rhombus",
            FigureKind::Pentagon => "pentagon",
            FigureKind::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FigureKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind {
                name: s.to_string(),
            })
    }
}

/// Common capability of all figures.
pub trait Shape {
    type Scalar: Coord;

    fn kind(&self) -> FigureKind;

    /// Vertices in boundary order.
    fn vertices(&self) -> &[Point<Self::Scalar>];

    /// Shape-specific geometric predicate; the first violation wins.
    fn check(&self) -> Result<(), Reason>;

    #[inline]
    fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Vertex centroid.
    #[inline]
    fn center(&self) -> Point<Self::Scalar> {
        geom::centroid(self.vertices())
    }

    /// Area via the shoelace formula.
    #[inline]
    fn surface(&self) -> f64 {
        geom::surface(self.vertices())
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    type Scalar = S::Scalar;

    fn kind(&self) -> FigureKind {
        (**self).kind()
    }
    fn vertices(&self) -> &[Point<Self::Scalar>] {
        (**self).vertices()
    }
    fn check(&self) -> Result<(), Reason> {
        (**self).check()
    }
    fn center(&self) -> Point<Self::Scalar> {
        (**self).center()
    }
    fn surface(&self) -> f64 {
        (**self).surface()
    }
}

/// Fill `slots` from the next `2 * slots.len()` tokens.
pub(crate) fn read_vertices<T, I, S>(slots: &mut [Point<T>], tokens: &mut I) -> Result<(), Reason>
where
    T: Coord,
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let expected = slots.len() * 2;
    for (k, slot) in slots.iter_mut().enumerate() {
        let x = tokens.next().ok_or(Reason::MissingCoordinates {
            expected,
            found: 2 * k,
        })?;
        let y = tokens.next().ok_or(Reason::MissingCoordinates {
            expected,
            found: 2 * k + 1,
        })?;
        *slot = Point::from_tokens(x.as_ref(), y.as_ref())
            .map_err(|token| Reason::MalformedNumber { token })?;
    }
    Ok(())
}

/// Join vertices as `"(x, y) (x, y) ..."`, forwarding format flags to each point.
pub(crate) fn fmt_vertices<T: fmt::Display>(
    vertices: &[Point<T>],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        fmt::Display::fmt(v, f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
