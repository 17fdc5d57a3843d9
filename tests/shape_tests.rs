use approx::assert_relative_eq;
use glam::Vec2;
use tessellation_editor::core::{apply_snap, find_closest_snap_points, select_best_pair};
use tessellation_editor::{Shape, ShapeError, ShapeKind};

fn square_10() -> Shape {
    Shape::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ])
    .expect("Quadrat ist gültig")
}

fn assert_vertices_eq(actual: &[Vec2], expected: &[Vec2], epsilon: f32) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(a.x, e.x, epsilon = epsilon);
        assert_relative_eq!(a.y, e.y, epsilon = epsilon);
    }
}

#[test]
fn test_degenerate_polygon_is_rejected() {
    let err = Shape::new(vec![Vec2::ZERO, Vec2::X]).unwrap_err();
    assert_eq!(err, ShapeError::TooFewVertices { count: 2 });
    assert!(err.to_string().contains('3'));
}

#[test]
fn test_move_to_is_idempotent() {
    let mut once = square_10();
    once.move_to(Vec2::new(33.0, -12.5));

    let mut twice = square_10();
    twice.move_to(Vec2::new(33.0, -12.5));
    twice.move_to(Vec2::new(33.0, -12.5));

    assert_eq!(once.world_vertices(), twice.world_vertices());
    assert_eq!(twice.world_centroid(), Vec2::new(33.0, -12.5));
}

#[test]
fn test_rotation_stays_normalized() {
    let mut shape = ShapeKind::Hexagon.create(Vec2::ZERO, 30.0);
    for step in [15.0, 350.0, -720.0, 1000.0, -15.0, 360.0, -359.0] {
        shape.rotate(step);
        let r = shape.rotation_degrees();
        assert!(r > -360.0 && r <= 360.0, "Rotation {r} außerhalb (-360, 360]");
    }
}

#[test]
fn test_huge_rotation_deltas_wrap_to_exact_remainder() {
    let mut shape = ShapeKind::Square.create(Vec2::ZERO, 30.0);
    shape.rotate(1.0e10);
    assert_relative_eq!(shape.rotation_degrees(), 280.0);

    let mut shape = ShapeKind::Square.create(Vec2::ZERO, 30.0);
    let delta = 1.0e8_f32 + 15.0;
    shape.rotate(delta);
    let expected = (delta as f64).rem_euclid(360.0) as f32;
    assert_relative_eq!(shape.rotation_degrees(), expected);
}

#[test]
fn test_full_turns_leave_world_vertices_unchanged() {
    let mut shape = ShapeKind::Triangle.create(Vec2::ZERO, 30.0);
    shape.move_to(Vec2::new(80.0, 20.0));
    let before = shape.world_vertices().to_vec();

    shape.rotate(360.0);
    assert_vertices_eq(shape.world_vertices(), &before, 0.011);

    shape.rotate(-720.0);
    assert_vertices_eq(shape.world_vertices(), &before, 0.011);
}

#[test]
fn test_repeated_small_rotations_do_not_drift() {
    let mut shape = ShapeKind::Square.create(Vec2::ZERO, 30.0);
    let before = shape.world_vertices().to_vec();

    for _ in 0..24 * 50 {
        shape.rotate(15.0);
    }

    assert_vertices_eq(shape.world_vertices(), &before, 0.011);
}

#[test]
fn test_every_kind_has_two_snap_points_per_vertex() {
    for kind in ShapeKind::ALL {
        let shape = kind.create(Vec2::new(5.0, 5.0), 30.0);
        assert_eq!(shape.snap_points().len(), 2 * shape.vertex_count());
    }
}

#[test]
fn test_point_in_polygon_for_square() {
    let shape = square_10();
    assert!(shape.contains_point(Vec2::new(5.0, 5.0)));
    assert!(!shape.contains_point(Vec2::new(15.0, 5.0)));
    // Halboffene Ränder: rechts außen, links innen
    assert!(!shape.contains_point(Vec2::new(10.0, 5.0)));
    assert!(shape.contains_point(Vec2::new(0.0, 5.0)));
}

#[test]
fn test_snap_detection_and_exact_coincidence() {
    let target = square_10();
    let mut active = square_10();
    active.move_to(Vec2::new(17.0, 6.0));

    let pairs = find_closest_snap_points(&active, &target, 5.0);
    assert!(!pairs.is_empty());
    let best = select_best_pair(&pairs).expect("bestes Paar");
    assert!(pairs.iter().all(|p| p.distance >= best.distance));

    apply_snap(&mut active, &best);
    assert!(active
        .snap_points()
        .iter()
        .any(|p| p.distance(best.target_point) < 0.011));
}

#[test]
fn test_triangle_rotate_then_move_end_to_end() {
    let mut shape = ShapeKind::Triangle.create(Vec2::ZERO, 30.0);
    shape.rotate(15.0);
    shape.move_to(Vec2::new(100.0, 50.0));

    assert_eq!(shape.world_centroid(), Vec2::new(100.0, 50.0));
    assert_vertices_eq(
        shape.world_vertices(),
        &[
            Vec2::new(104.48, 33.27),
            Vec2::new(83.27, 54.48),
            Vec2::new(112.25, 62.25),
        ],
        1e-3,
    );
}
