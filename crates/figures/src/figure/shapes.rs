//! Concrete figures. The three variants differ only in vertex count and
//! predicate, so the shared surface is generated by `figure!`.

use std::fmt;
use std::str::FromStr;

use super::{fmt_vertices, read_vertices, Figure, FigureKind, InvalidShapeError, Reason, Shape};
use crate::geom::{check_regular, check_rhombus, sequences_equal};
use crate::point::{Coord, Point};

macro_rules! figure {
    ($(#[$meta:meta])* $name:ident, $n:literal, $check:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name<T = f64> {
            vertices: [Point<T>; $n],
        }

        impl<T: Coord> $name<T> {
            pub const VERTEX_COUNT: usize = $n;

            /// Validate and wrap a vertex array.
            pub fn from_vertices(vertices: [Point<T>; $n]) -> Result<Self, InvalidShapeError> {
                let shape = Self { vertices };
                shape
                    .check()
                    .map_err(|reason| InvalidShapeError::new(FigureKind::$name, reason))?;
                Ok(shape)
            }

            /// Consume exactly `2 * VERTEX_COUNT` tokens as vertices and validate them.
            ///
            /// On failure every vertex is reset to zero.
            pub fn read<I, S>(&mut self, tokens: &mut I) -> Result<(), InvalidShapeError>
            where
                I: Iterator<Item = S>,
                S: AsRef<str>,
            {
                let outcome = read_vertices(&mut self.vertices, tokens).and_then(|()| self.check());
                outcome.map_err(|reason| {
                    self.vertices = Default::default();
                    InvalidShapeError::new(FigureKind::$name, reason)
                })
            }

            pub fn into_vertices(self) -> [Point<T>; $n] {
                self.vertices
            }
        }

        impl<T: Coord> Shape for $name<T> {
            type Scalar = T;

            #[inline]
            fn kind(&self) -> FigureKind {
                FigureKind::$name
            }
            #[inline]
            fn vertices(&self) -> &[Point<T>] {
                &self.vertices
            }
            fn check(&self) -> Result<(), Reason> {
                $check(&self.vertices)
            }
        }

        /// Equal up to a cyclic shift of the starting vertex.
        impl<T: Coord> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                sequences_equal(&self.vertices, &other.vertices)
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_vertices(&self.vertices, f)
            }
        }

        impl<T: Coord> FromStr for $name<T> {
            type Err = InvalidShapeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut shape = Self::default();
                let mut tokens = s.split_whitespace();
                shape.read(&mut tokens)?;
                match tokens.next() {
                    Some(extra) => Err(InvalidShapeError::new(
                        FigureKind::$name,
                        Reason::UnexpectedToken {
                            token: extra.to_string(),
                        },
                    )),
                    None => Ok(shape),
                }
            }
        }

        impl<T> From<$name<T>> for Figure<T> {
            fn from(shape: $name<T>) -> Self {
                Figure::$name(shape)
            }
        }
    };
}

figure!(
    /// Four equal sides, diagonals bisecting each other.
    Rhombus,
    4,
    check_rhombus
);

figure!(
    /// Regular pentagon: equal sides and equal centroid distances.
    Pentagon,
    5,
    check_regular
);

figure!(
    /// Regular hexagon: equal sides and equal centroid distances.
    Hexagon,
    6,
    check_regular
);
