use nalgebra::Vector2;

use super::cfg::EPS;
use crate::point::{Coord, Point};

/// Mean of the vertex coordinates, in `f64`.
pub fn centroid_vector<T: Coord>(vertices: &[Point<T>]) -> Vector2<f64> {
    let sum = vertices
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.to_vector());
    sum / vertices.len() as f64
}

/// Mean of the vertex coordinates, narrowed back to the point scalar.
#[inline]
pub fn centroid<T: Coord>(vertices: &[Point<T>]) -> Point<T> {
    Point::from_vector(centroid_vector(vertices))
}

/// Shoelace area `|Σ x_i y_{i+1} - y_i x_{i+1}| / 2`; orientation-independent.
pub fn surface<T: Coord>(vertices: &[Point<T>]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| vertices[i].cross(&vertices[(i + 1) % n]))
        .sum();
    twice.abs() / 2.0
}

/// Lengths of the closed edge loop: `side[i] = |v_i - v_{i+1}|`.
pub fn side_lengths<T: Coord>(vertices: &[Point<T>]) -> Vec<f64> {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance_to(&vertices[(i + 1) % n]))
        .collect()
}

/// True if two distinct indices hold exactly equal points.
pub fn has_duplicate_vertices<T: Coord>(vertices: &[Point<T>]) -> bool {
    vertices
        .iter()
        .enumerate()
        .any(|(i, a)| vertices[i + 1..].iter().any(|b| a == b))
}

/// True if some cyclic rotation of `rhs` equals `lhs` exactly.
///
/// Reversed (mirrored winding) sequences are not tried.
pub fn sequences_equal<T: Coord>(lhs: &[Point<T>], rhs: &[Point<T>]) -> bool {
    let n = lhs.len();
    if n != rhs.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    (0..n).any(|shift| (0..n).all(|i| lhs[i] == rhs[(i + shift) % n]))
}

#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}
