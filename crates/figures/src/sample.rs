//! Reproducible valid figures (regular polygons and rhombi).
//!
//! Purpose
//! - Exact vertex constructions for tests and benches.
//! - A small seeded sampler for the CLI `sample` command: radius, phase and
//!   center are drawn from a `StdRng` derived from a replay token, so every
//!   `(seed, index)` pair always yields the same figure.

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::figure::{Figure, FigureKind, Hexagon, InvalidShapeError, Pentagon, Rhombus};
use crate::point::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Circumradius (regular) or half-diagonal (rhombus) range.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Center coordinates are drawn from `[-center_span, center_span]`.
    pub center_span: f64,
    /// Random orientation in [0, 2π)?
    pub random_phase: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            radius_min: 1.0,
            radius_max: 5.0,
            center_span: 10.0,
            random_phase: true,
        }
    }
}

impl SampleCfg {
    /// Bounds must be finite and the center range `2 * center_span` must not overflow.
    pub fn validate(&self) -> Result<(), SampleError> {
        for (name, v) in [
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("center_span", self.center_span),
        ] {
            if !v.is_finite() {
                return Err(SampleError::invalid(format!("{name} must be finite, got {v}")));
            }
        }
        if !(2.0 * self.center_span).is_finite() {
            return Err(SampleError::invalid(format!(
                "center_span {} overflows the center range",
                self.center_span
            )));
        }
        Ok(())
    }
}

/// Failure of `draw_figure`.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
    /// The drawn vertices did not validate (e.g. zero radius).
    Shape(InvalidShapeError),
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::Shape(e) => write!(f, "sampled figure rejected: {e}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParams { .. } => None,
            Self::Shape(e) => Some(e),
        }
    }
}

impl From<InvalidShapeError> for SampleError {
    fn from(e: InvalidShapeError) -> Self {
        Self::Shape(e)
    }
}

/// Vertices of a regular `N`-gon, counterclockwise, first vertex at angle `phase`.
pub fn regular_vertices<const N: usize>(
    center: Point<f64>,
    radius: f64,
    phase: f64,
) -> [Point<f64>; N] {
    let c = center.to_vector();
    std::array::from_fn(|k| {
        let th = phase + TAU * (k as f64) / (N as f64);
        Point::from_vector(c + Vector2::new(th.cos(), th.sin()) * radius)
    })
}

/// Rhombus with half-diagonals `p` (along `angle`) and `q` (perpendicular).
///
/// Area is `2 p q`; the diagonals meet at `center`.
pub fn rhombus_vertices(center: Point<f64>, p: f64, q: f64, angle: f64) -> [Point<f64>; 4] {
    let c = center.to_vector();
    let u = Vector2::new(angle.cos(), angle.sin());
    let v = Vector2::new(-angle.sin(), angle.cos());
    [c + u * p, c + v * q, c - u * p, c - v * q].map(Point::from_vector)
}

/// Draw one valid figure of `kind`.
///
/// Rhombi get independent half-diagonals from the radius range. Non-finite
/// bounds are rejected before any draw. Validation still runs, so a
/// degenerate configuration (e.g. `radius_max ≈ 0`) surfaces as an error
/// instead of an unusable figure.
pub fn draw_figure(
    kind: FigureKind,
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<Figure<f64>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let lo = cfg.radius_min.max(0.0);
    let hi = cfg.radius_max.max(lo);
    let mut radius = || {
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    };
    let r = radius();
    let q = radius();
    let span = cfg.center_span.abs();
    let (cx, cy) = if span > 0.0 {
        (rng.gen_range(-span..=span), rng.gen_range(-span..=span))
    } else {
        (0.0, 0.0)
    };
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    let center = Point::new(cx, cy);
    Ok(match kind {
        FigureKind::Rhombus => {
            Figure::Rhombus(Rhombus::from_vertices(rhombus_vertices(center, r, q, phase))?)
        }
        FigureKind::Pentagon => {
            Figure::Pentagon(Pentagon::from_vertices(regular_vertices(center, r, phase))?)
        }
        FigureKind::Hexagon => {
            Figure::Hexagon(Hexagon::from_vertices(regular_vertices(center, r, phase))?)
        }
    })
}
