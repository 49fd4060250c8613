//! 2D point over a generic scalar.
//!
//! Equality is exact on the stored scalars (no tolerance) so integer scalars
//! compare naturally. Metric quantities (distance, dot, cross) are computed in
//! `f64` via `nalgebra::Vector2`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::Vector2;
use num::{Num, NumCast, ToPrimitive};

/// Scalar types a `Point` can hold: integer and float primitives.
pub trait Coord:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + FromStr + Num + NumCast
{
    /// Widen to `f64` (NaN if the scalar has no `f64` image).
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Narrow from `f64`; integers truncate, unrepresentable values become zero.
    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::zero)
    }

    /// Parse one whitespace-free token; the offending token is handed back on failure.
    fn parse_token(token: &str) -> Result<Self, String> {
        token.parse::<Self>().map_err(|_| token.to_string())
    }
}

impl<T> Coord for T where
    T: Copy + Default + PartialEq + fmt::Debug + fmt::Display + FromStr + Num + NumCast
{
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.as_f64(), self.y.as_f64())
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(T::from_f64_lossy(v.x), T::from_f64_lossy(v.y))
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.to_vector().dot(&other.to_vector())
    }

    /// z-component of the 3D cross product, `x1 y2 - y1 x2`.
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.to_vector().perp(&other.to_vector())
    }

    /// Build from a pair of tokens, returning the first malformed token on failure.
    pub fn from_tokens(x: &str, y: &str) -> Result<Self, String> {
        Ok(Self::new(T::parse_token(x)?, T::parse_token(y)?))
    }
}

impl<T: Coord> Add for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> AddAssign for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Coord> SubAssign for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Scalar division. No guard against zero: the result follows IEEE rules
/// before narrowing back to `T`.
impl<T: Coord> Div<f64> for Point<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::from_vector(self.to_vector() / rhs)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Display::fmt(&self.x, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y, f)?;
        write!(f, ")")
    }
}

/// Error for `Point::from_str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePointError {
    pub input: String,
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse a point from {:?}", self.input)
    }
}

impl std::error::Error for ParsePointError {}

/// Accepts both the raw `"x y"` input form and the printed `"(x, y)"` form.
impl<T: Coord> FromStr for Point<T> {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(err)?,
            None => trimmed,
        };
        let mut tokens = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        let (x, y) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => return Err(err()),
        };
        Self::from_tokens(x, y).map_err(|_| err())
    }
}
