use std::fmt;

use super::{FigureKind, Hexagon, InvalidShapeError, Pentagon, Reason, Rhombus, Shape};
use crate::point::{Coord, Point};

/// Closed union of the figure variants.
#[derive(Clone, Debug)]
pub enum Figure<T = f64> {
    Rhombus(Rhombus<T>),
    Pentagon(Pentagon<T>),
    Hexagon(Hexagon<T>),
}

impl<T: Coord> Figure<T> {
    /// All-zero figure of the given kind; fill it with `read` before use.
    pub fn empty(kind: FigureKind) -> Self {
        match kind {
            FigureKind::Rhombus => Figure::Rhombus(Rhombus::default()),
            FigureKind::Pentagon => Figure::Pentagon(Pentagon::default()),
            FigureKind::Hexagon => Figure::Hexagon(Hexagon::default()),
        }
    }

    /// Parse exactly `2 * kind.vertex_count()` numbers.
    pub fn parse(kind: FigureKind, s: &str) -> Result<Self, InvalidShapeError> {
        Ok(match kind {
            FigureKind::Rhombus => Figure::Rhombus(s.parse()?),
            FigureKind::Pentagon => Figure::Pentagon(s.parse()?),
            FigureKind::Hexagon => Figure::Hexagon(s.parse()?),
        })
    }

    /// In-place read; see `Rhombus::read`.
    pub fn read<I, S>(&mut self, tokens: &mut I) -> Result<(), InvalidShapeError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Figure::Rhombus(r) => r.read(tokens),
            Figure::Pentagon(p) => p.read(tokens),
            Figure::Hexagon(h) => h.read(tokens),
        }
    }
}

impl<T: Coord> Shape for Figure<T> {
    type Scalar = T;

    fn kind(&self) -> FigureKind {
        match self {
            Figure::Rhombus(_) => FigureKind::Rhombus,
            Figure::Pentagon(_) => FigureKind::Pentagon,
            Figure::Hexagon(_) => FigureKind::Hexagon,
        }
    }
    fn vertices(&self) -> &[Point<T>] {
        match self {
            Figure::Rhombus(r) => r.vertices(),
            Figure::Pentagon(p) => p.vertices(),
            Figure::Hexagon(h) => h.vertices(),
        }
    }
    fn check(&self) -> Result<(), Reason> {
        match self {
            Figure::Rhombus(r) => r.check(),
            Figure::Pentagon(p) => p.check(),
            Figure::Hexagon(h) => h.check(),
        }
    }
}

/// Same variant and same vertices up to rotation.
impl<T: Coord> PartialEq for Figure<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Figure::Rhombus(a), Figure::Rhombus(b)) => a == b,
            (Figure::Pentagon(a), Figure::Pentagon(b)) => a == b,
            (Figure::Hexagon(a), Figure::Hexagon(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Figure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Rhombus(r) => fmt::Display::fmt(r, f),
            Figure::Pentagon(p) => fmt::Display::fmt(p, f),
            Figure::Hexagon(h) => fmt::Display::fmt(h, f),
        }
    }
}

/// Area of the figure.
impl<T: Coord> From<&Figure<T>> for f64 {
    fn from(figure: &Figure<T>) -> f64 {
        figure.surface()
    }
}
