//! Regularity predicates.
//!
//! Both predicates reject duplicate vertices and (near) zero area first, then
//! compare every measured length against the first one in input order. The
//! first mismatch is reported.

use super::cfg::EPS;
use super::polygon::{
    approximately_equal, centroid_vector, has_duplicate_vertices, side_lengths, surface,
};
use crate::figure::Reason;
use crate::point::{Coord, Point};

fn check_common<T: Coord>(vertices: &[Point<T>]) -> Result<(), Reason> {
    if has_duplicate_vertices(vertices) {
        return Err(Reason::DuplicateVertices);
    }
    if surface(vertices) < EPS {
        return Err(Reason::ZeroArea);
    }
    Ok(())
}

fn check_equal_sides<T: Coord>(vertices: &[Point<T>]) -> Result<(), Reason> {
    let sides = side_lengths(vertices);
    let first = sides[0];
    if first < EPS {
        return Err(Reason::ZeroArea);
    }
    match sides
        .iter()
        .skip(1)
        .position(|&s| !approximately_equal(first, s))
    {
        Some(k) => Err(Reason::UnequalSides { side: k + 1 }),
        None => Ok(()),
    }
}

/// Quadrilateral with four equal sides whose diagonals bisect each other.
///
/// Convexity is not checked separately; vertices are expected in boundary order.
pub fn check_rhombus<T: Coord>(vertices: &[Point<T>]) -> Result<(), Reason> {
    debug_assert_eq!(vertices.len(), 4);
    check_common(vertices)?;
    check_equal_sides(vertices)?;
    let mid_ac = (vertices[0].to_vector() + vertices[2].to_vector()) / 2.0;
    let mid_bd = (vertices[1].to_vector() + vertices[3].to_vector()) / 2.0;
    if approximately_equal(mid_ac.x, mid_bd.x) && approximately_equal(mid_ac.y, mid_bd.y) {
        Ok(())
    } else {
        Err(Reason::DiagonalsDoNotBisect)
    }
}

/// Equal sides and equal distances from the centroid.
///
/// Necessary for regularity; self-intersecting star orderings are not excluded.
pub fn check_regular<T: Coord>(vertices: &[Point<T>]) -> Result<(), Reason> {
    check_common(vertices)?;
    check_equal_sides(vertices)?;
    let c = centroid_vector(vertices);
    let radii: Vec<f64> = vertices.iter().map(|p| (p.to_vector() - c).norm()).collect();
    match radii
        .iter()
        .skip(1)
        .position(|&r| !approximately_equal(radii[0], r))
    {
        Some(k) => Err(Reason::UnequalRadii { vertex: k + 1 }),
        None => Ok(()),
    }
}
