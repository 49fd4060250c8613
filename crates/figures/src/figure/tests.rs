use std::f64::consts::{PI, TAU};
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::sample::{regular_vertices, rhombus_vertices};

/// Raw input for a regular `N`-gon centered at the origin.
fn regular_input<const N: usize>(radius: f64, phase: f64) -> String {
    regular_vertices::<N>(Point::new(0.0, 0.0), radius, phase)
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn regular_area(n: usize, radius: f64) -> f64 {
    0.5 * n as f64 * radius * radius * (TAU / n as f64).sin()
}

#[test]
fn rhombus_computes_surface_and_center() {
    let rhombus: Rhombus = "0 0 1 1 2 0 1 -1".parse().unwrap();
    assert!((rhombus.surface() - 2.0).abs() < 1e-6);
    let c = rhombus.center();
    assert!((c.x - 1.0).abs() < 1e-6);
    assert!(c.y.abs() < 1e-6);
}

#[test]
fn rhombus_rejects_unequal_sides() {
    let err = "0 0 2 0 3 1 1 1".parse::<Rhombus>().unwrap_err();
    assert_eq!(err.kind, FigureKind::Rhombus);
    assert_eq!(err.reason, Reason::UnequalSides { side: 1 });
    assert_eq!(
        err.to_string(),
        "points do not form a rhombus: side 1 differs in length from side 0"
    );
}

#[test]
fn rhombus_rejects_duplicate_vertices() {
    let err = "0 0 1 1 1 1 2 0".parse::<Rhombus>().unwrap_err();
    assert_eq!(err.reason, Reason::DuplicateVertices);
}

#[test]
fn rhombus_handles_high_precision_coordinates() {
    let scale = 0.123456;
    let rhombus: Rhombus = "0.987654 -0.54321 1.11111 -0.296298 1.234566 -0.54321 1.11111 -0.790122"
        .parse()
        .unwrap();
    assert!((rhombus.surface() - 4.0 * scale * scale).abs() < 1e-9);
    let c = rhombus.center();
    assert!((c.x - (0.987654 + scale)).abs() < 1e-9);
    assert!((c.y + 0.54321).abs() < 1e-9);
}

#[test]
fn pentagon_validates_regular_polygon() {
    let radius = 3.0;
    let pentagon: Pentagon = regular_input::<5>(radius, 0.0).parse().unwrap();
    assert!((pentagon.surface() - regular_area(5, radius)).abs() < 1e-6);
    let c = pentagon.center();
    assert!(c.x.abs() < 1e-6 && c.y.abs() < 1e-6);
}

#[test]
fn pentagon_rejects_uneven_side() {
    let err = "2 0 0 2 -2 0 0 -2 3 0".parse::<Pentagon>().unwrap_err();
    assert_eq!(err.kind, FigureKind::Pentagon);
    assert_eq!(err.reason, Reason::UnequalSides { side: 3 });
}

#[test]
fn equilateral_pentagon_off_the_circle_fails_on_radii() {
    // Unit edges at headings 0, 60, 150 degrees; the last two close the loop.
    let mut heads: Vec<f64> = vec![0.0, 60.0_f64.to_radians(), 150.0_f64.to_radians()];
    let partial: nalgebra::Vector2<f64> = heads
        .iter()
        .map(|th| nalgebra::Vector2::new(th.cos(), th.sin()))
        .sum();
    let w = -partial;
    let phi = w.y.atan2(w.x);
    let alpha = (w.norm() / 2.0).acos();
    heads.extend([phi - alpha, phi + alpha]);

    let mut p = nalgebra::Vector2::new(0.0_f64, 0.0);
    let v: [Point; 5] = std::array::from_fn(|k| {
        let vertex = Point::from_vector(p);
        p += nalgebra::Vector2::new(heads[k].cos(), heads[k].sin());
        vertex
    });
    assert!(p.norm() < 1e-12);
    assert!(crate::geom::side_lengths(&v)
        .iter()
        .all(|s| (s - 1.0).abs() < 1e-12));

    let err = Pentagon::from_vertices(v).unwrap_err();
    assert_eq!(err.kind, FigureKind::Pentagon);
    assert!(matches!(err.reason, Reason::UnequalRadii { .. }), "{err}");
}

#[test]
fn pentagon_handles_high_precision_coordinates() {
    let radius = 1.23456789;
    let pentagon: Pentagon = regular_input::<5>(radius, 0.321987654).parse().unwrap();
    assert!((pentagon.surface() - regular_area(5, radius)).abs() < 1e-9);
    let c = pentagon.center();
    assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9);
}

#[test]
fn hexagon_rejects_degenerate_polygon() {
    let err = "0 0 1 0 2 0 3 0 4 0 5 0".parse::<Hexagon>().unwrap_err();
    assert_eq!(err.reason, Reason::ZeroArea);
}

#[test]
fn hexagon_computes_surface_and_center() {
    for (radius, phase, tol) in [(2.5, 0.0, 1e-6), (1.987654321, -0.222222222, 1e-9)] {
        let hexagon: Hexagon = regular_input::<6>(radius, phase).parse().unwrap();
        assert!((hexagon.surface() - regular_area(6, radius)).abs() < tol);
        let c = hexagon.center();
        assert!(c.x.abs() < tol && c.y.abs() < tol);
    }
}

#[test]
fn read_consumes_exactly_the_vertex_tokens() {
    let mut tokens = "0 0 1 1 2 0 1 -1 9 9".split_whitespace();
    let mut rhombus = Rhombus::<f64>::default();
    rhombus.read(&mut tokens).unwrap();
    assert_eq!(tokens.next(), Some("9"));
    assert!(rhombus.validate());
}

#[test]
fn failed_read_resets_vertices() {
    let mut rhombus: Rhombus = "0 0 1 1 2 0 1 -1".parse().unwrap();
    let mut tokens = "0 0 2 0 3 1 1 1".split_whitespace();
    assert!(rhombus.read(&mut tokens).is_err());
    assert!(rhombus.vertices().iter().all(|v| *v == Point::default()));
    assert!(!rhombus.validate());
}

#[test]
fn malformed_and_short_input() {
    let short = "0 0 1".parse::<Rhombus>().unwrap_err();
    assert_eq!(
        short.reason,
        Reason::MissingCoordinates {
            expected: 8,
            found: 3
        }
    );
    let bad = "0 0 1 a 2 0 1 -1".parse::<Rhombus>().unwrap_err();
    assert_eq!(
        bad.reason,
        Reason::MalformedNumber {
            token: "a".to_string()
        }
    );
    let long = "0 0 1 1 2 0 1 -1 5".parse::<Rhombus>().unwrap_err();
    assert_eq!(
        long.reason,
        Reason::UnexpectedToken {
            token: "5".to_string()
        }
    );
}

#[test]
fn integer_scalars() {
    let rhombus: Rhombus<i32> = "0 0 1 1 2 0 1 -1".parse().unwrap();
    assert_eq!(rhombus.surface(), 2.0);
    assert_eq!(rhombus.center(), Point::new(1, 0));
    let err = "0 0 1 1 2 0.5 1 -1".parse::<Rhombus<i32>>().unwrap_err();
    assert_eq!(
        err.reason,
        Reason::MalformedNumber {
            token: "0.5".to_string()
        }
    );
}

#[test]
fn equality_up_to_rotation_only() {
    let a: Rhombus = "0 0 1 1 2 0 1 -1".parse().unwrap();
    let rotated: Rhombus = "2 0 1 -1 0 0 1 1".parse().unwrap();
    let reversed: Rhombus = "1 -1 2 0 1 1 0 0".parse().unwrap();
    assert_eq!(a, rotated);
    assert_ne!(a, reversed);
}

#[test]
fn figures_of_different_kinds_never_compare_equal() {
    let square_as_rhombus: Figure = Figure::parse(FigureKind::Rhombus, "1 0 0 1 -1 0 0 -1").unwrap();
    let pentagon: Figure = Figure::parse(FigureKind::Pentagon, &regular_input::<5>(1.0, 0.0)).unwrap();
    assert_ne!(square_as_rhombus, pentagon);
    assert_eq!(square_as_rhombus, square_as_rhombus.clone());
    assert_eq!(square_as_rhombus.kind(), FigureKind::Rhombus);
    assert_eq!(pentagon.kind(), FigureKind::Pentagon);
}

#[test]
fn copy_and_move() {
    let mut original: Pentagon = regular_input::<5>(2.0, 0.7).parse().unwrap();
    let copy = original.clone();
    assert_eq!(copy, original);
    let moved = std::mem::take(&mut original);
    assert_eq!(moved, copy);
    assert!(original.vertices().iter().all(|v| *v == Point::default()));
    // Unwrapping and re-wrapping keeps the vertex order.
    let again = Pentagon::from_vertices(moved.into_vertices()).unwrap();
    assert_eq!(again.vertices(), copy.vertices());
}

#[test]
fn display_renders_parenthesized_pairs() {
    let figure = Figure::<f64>::parse(FigureKind::Rhombus, "0 0 1 1 2 0 1 -1").unwrap();
    assert_eq!(figure.to_string(), "(0, 0) (1, 1) (2, 0) (1, -1)");
    assert_eq!(f64::from(&figure), 2.0);
    // the printed form is not accepted back as raw input
    assert!(Figure::<f64>::parse(FigureKind::Rhombus, &figure.to_string()).is_err());
}

#[test]
fn in_place_read_through_figure() {
    let mut figure = Figure::<f64>::empty(FigureKind::Hexagon);
    assert!(!figure.validate());
    let input = regular_input::<6>(1.0, 0.0);
    figure.read(&mut input.split_whitespace()).unwrap();
    assert!((figure.surface() - regular_area(6, 1.0)).abs() < 1e-9);
}

#[test]
fn kind_names_parse() {
    assert_eq!("Pentagon".parse::<FigureKind>(), Ok(FigureKind::Pentagon));
    assert_eq!(" hexagon ".parse::<FigureKind>(), Ok(FigureKind::Hexagon));
    assert!("triangle".parse::<FigureKind>().is_err());
    for kind in FigureKind::ALL {
        assert_eq!(Figure::<f64>::empty(kind).vertices().len(), kind.vertex_count());
    }
    assert_eq!(Rhombus::<i32>::VERTEX_COUNT, 4);
    assert_eq!(Pentagon::<f64>::VERTEX_COUNT, 5);
    assert_eq!(Hexagon::<f32>::VERTEX_COUNT, 6);
}

#[test]
fn shared_handles_delegate() {
    let rhombus: Rhombus = "0 0 1 2 2 0 1 -2".parse().unwrap();
    let handle = Rc::new(rhombus.clone());
    let other = Rc::clone(&handle);
    assert_eq!(handle.surface(), rhombus.surface());
    assert_eq!(other.center(), Point::new(1.0, 0.0));
    assert_eq!(Shape::kind(&handle), FigureKind::Rhombus);
    assert_eq!(Rc::strong_count(&handle), 2);
}

proptest! {
    #[test]
    fn regular_pentagon_matches_closed_form(
        radius in 0.1f64..100.0,
        phase in 0.0f64..TAU,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
    ) {
        let center = Point::new(cx, cy);
        let p = Pentagon::from_vertices(regular_vertices(center, radius, phase)).unwrap();
        let expected = regular_area(5, radius);
        prop_assert!((p.surface() - expected).abs() <= 1e-6 * expected);
        prop_assert!(p.center().distance_to(&center) < 1e-6);
    }

    #[test]
    fn regular_hexagon_matches_closed_form(
        radius in 0.1f64..100.0,
        phase in 0.0f64..TAU,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
    ) {
        let center = Point::new(cx, cy);
        let h = Hexagon::from_vertices(regular_vertices(center, radius, phase)).unwrap();
        let expected = regular_area(6, radius);
        prop_assert!((h.surface() - expected).abs() <= 1e-6 * expected);
        prop_assert!(h.center().distance_to(&center) < 1e-6);
    }

    #[test]
    fn rhombus_area_is_twice_half_diagonal_product(
        p in 0.1f64..50.0,
        q in 0.1f64..50.0,
        angle in 0.0f64..PI,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
    ) {
        let center = Point::new(cx, cy);
        let r = Rhombus::from_vertices(rhombus_vertices(center, p, q, angle)).unwrap();
        prop_assert!((r.surface() - 2.0 * p * q).abs() <= 1e-6 * 2.0 * p * q);
        prop_assert!(r.center().distance_to(&center) < 1e-6);
    }

    #[test]
    fn equality_is_rotation_invariant_but_not_reflection_invariant(
        radius in 0.5f64..20.0,
        phase in 0.0f64..TAU,
        shift in 0usize..6,
    ) {
        let v: [Point; 6] = regular_vertices(Point::new(0.0, 0.0), radius, phase);
        let base = Hexagon::from_vertices(v).unwrap();

        let mut rotated = v;
        rotated.rotate_left(shift);
        prop_assert_eq!(Hexagon::from_vertices(rotated).unwrap(), base.clone());

        let mut reversed = v;
        reversed.reverse();
        prop_assert_ne!(Hexagon::from_vertices(reversed).unwrap(), base);
    }

    #[test]
    fn moving_one_vertex_breaks_regularity(
        radius in 0.5f64..20.0,
        phase in 0.0f64..TAU,
        k in 0usize..5,
        delta in 1e-3f64..1.0,
    ) {
        let mut v: [Point; 5] = regular_vertices(Point::new(0.0, 0.0), radius, phase);
        v[k] = Point::from_vector(v[k].to_vector() * (1.0 + delta / radius));
        prop_assert!(Pentagon::from_vertices(v).is_err());
    }
}
