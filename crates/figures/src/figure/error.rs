use std::fmt;

use super::FigureKind;

/// Why a vertex set was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Input ended before all `expected` coordinates were read.
    MissingCoordinates { expected: usize, found: usize },
    /// A token did not parse as the point scalar.
    MalformedNumber { token: String },
    /// Input continued after the last vertex (whole-string parsing only).
    UnexpectedToken { token: String },
    DuplicateVertices,
    ZeroArea,
    /// `side` is the first edge whose length differs from edge 0.
    UnequalSides { side: usize },
    /// `vertex` is the first vertex whose centroid distance differs from vertex 0.
    UnequalRadii { vertex: usize },
    DiagonalsDoNotBisect,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingCoordinates { expected, found } => {
                write!(f, "expected {expected} coordinates, found {found}")
            }
            Reason::MalformedNumber { token } => write!(f, "malformed number {token:?}"),
            Reason::UnexpectedToken { token } => write!(f, "unexpected trailing token {token:?}"),
            Reason::DuplicateVertices => write!(f, "duplicate vertices"),
            Reason::ZeroArea => write!(f, "zero area"),
            Reason::UnequalSides { side } => {
                write!(f, "side {side} differs in length from side 0")
            }
            Reason::UnequalRadii { vertex } => write!(
                f,
                "vertex {vertex} lies at a different distance from the centroid than vertex 0"
            ),
            Reason::DiagonalsDoNotBisect => write!(f, "diagonals do not bisect each other"),
        }
    }
}

/// A parse or validation attempt failed; the figure must not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidShapeError {
    pub kind: FigureKind,
    pub reason: Reason,
}

impl InvalidShapeError {
    pub fn new(kind: FigureKind, reason: Reason) -> Self {
        Self { kind, reason }
    }
}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "points do not form a {}: {}", self.kind, self.reason)
    }
}

impl std::error::Error for InvalidShapeError {}

/// Unknown figure name given to `FigureKind::from_str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKind {
    pub name: String,
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown figure {:?} (expected rhombus, pentagon or hexagon)",
            self.name
        )
    }
}

impl std::error::Error for UnknownKind {}
