use approx::assert_relative_eq;
use glam::Vec2;
use tessellation_editor::app::RotationDirection;
use tessellation_editor::{
    AppController, AppIntent, AppState, DrawCommand, ShapeError, ShapeKind,
};

use super::{frame, place_at};

#[test]
fn test_click_commits_and_spawns_new_active_at_mouse() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_at(&mut controller, &mut state, Vec2::new(100.0, 100.0));

    assert_eq!(state.placed_count(), 1);
    assert_eq!(
        state.scene.placed()[0].world_centroid(),
        Vec2::new(100.0, 100.0)
    );
    assert_eq!(
        state.scene.active().world_centroid(),
        Vec2::new(100.0, 100.0)
    );
    assert_relative_eq!(state.scene.active().rotation_degrees(), 0.0);
}

#[test]
fn test_commit_near_neighbour_snaps_to_shared_vertex() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_at(&mut controller, &mut state, Vec2::ZERO);

    // Linke untere Ecke der aktiven Form liegt ~1.8 neben der rechten unteren Ecke
    let mouse = Vec2::new(31.5, 1.0);
    let scene = frame(&mut controller, &mut state, mouse, Vec::new());
    let best = state.snap.best.expect("Snap-Kandidat erwartet");
    assert!(best.distance < state.options.snap_distance_max);
    assert!(scene
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::FillCircle { .. })));

    frame(&mut controller, &mut state, mouse, vec![AppIntent::PrimaryClick]);

    assert_eq!(state.placed_count(), 2);
    let snapped = &state.scene.placed()[1];
    assert_relative_eq!(snapped.world_centroid().x, 30.0, epsilon = 0.02);
    assert_relative_eq!(snapped.world_centroid().y, 0.0, epsilon = 0.02);

    let shared = state.scene.placed()[0].world_vertices()[2];
    let coincide = snapped
        .world_vertices()
        .iter()
        .any(|v| v.distance(shared) < 0.02);
    assert!(coincide, "Eckpunkte sollten nach dem Snap zusammenfallen");
}

#[test]
fn test_commit_far_from_neighbour_keeps_mouse_position() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_at(&mut controller, &mut state, Vec2::ZERO);
    place_at(&mut controller, &mut state, Vec2::new(300.0, 0.0));

    assert_eq!(
        state.scene.placed()[1].world_centroid(),
        Vec2::new(300.0, 0.0)
    );
}

#[test]
fn test_stale_snap_is_not_reused_after_moving_away() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_at(&mut controller, &mut state, Vec2::ZERO);
    frame(&mut controller, &mut state, Vec2::new(31.5, 1.0), Vec::new());
    assert!(state.snap.has_snap());

    // Maus weit weg, im selben Frame klicken: kein Snap aus dem Vorframe
    let far = Vec2::new(500.0, 500.0);
    frame(&mut controller, &mut state, far, vec![AppIntent::PrimaryClick]);

    assert_eq!(state.scene.placed()[1].world_centroid(), far);
}

#[test]
fn test_undo_after_commit_removes_last_and_clears_snap_target() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.can_undo());
    place_at(&mut controller, &mut state, Vec2::ZERO);
    place_at(&mut controller, &mut state, Vec2::new(200.0, 0.0));
    assert_eq!(state.snap.target_index, Some(1));
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.placed_count(), 1);
    assert!(state.snap.target_index.is_none());

    frame(&mut controller, &mut state, Vec2::new(200.0, 0.0), Vec::new());
    assert_eq!(state.snap.target_index, Some(0));

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::UndoRequested)
            .expect("Undo sollte ohne Fehler durchlaufen");
    }
    assert_eq!(state.placed_count(), 0);
    assert!(!state.can_undo());
    frame(&mut controller, &mut state, Vec2::ZERO, Vec::new());
    assert!(state.snap.target_index.is_none());
}

#[test]
fn test_held_rotation_is_rate_limited() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let held = || {
        vec![AppIntent::RotateHeld {
            direction: RotationDirection::Clockwise,
        }]
    };

    controller
        .update(&mut state, 0.05, Vec2::ZERO, held())
        .expect("Frame");
    assert_relative_eq!(state.scene.active().rotation_degrees(), 0.0);

    controller
        .update(&mut state, 0.06, Vec2::ZERO, held())
        .expect("Frame");
    assert_relative_eq!(state.scene.active().rotation_degrees(), 15.0);
    assert_relative_eq!(state.editor.time_since_last_rotation, 0.0);

    controller
        .update(&mut state, 0.016, Vec2::ZERO, held())
        .expect("Frame");
    assert_relative_eq!(state.scene.active().rotation_degrees(), 15.0);
}

#[test]
fn test_wheel_rotation_is_immediate_and_counter_clockwise_is_negative() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    frame(
        &mut controller,
        &mut state,
        Vec2::ZERO,
        vec![
            AppIntent::RotateStep {
                direction: RotationDirection::CounterClockwise,
            },
            AppIntent::RotateStep {
                direction: RotationDirection::CounterClockwise,
            },
        ],
    );

    assert_relative_eq!(state.scene.active().rotation_degrees(), -30.0);
}

#[test]
fn test_cycle_shape_kind_recreates_active_at_centroid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    frame(&mut controller, &mut state, Vec2::new(60.0, 60.0), Vec::new());

    let expected = [
        (ShapeKind::Square, 4),
        (ShapeKind::Hexagon, 6),
        (ShapeKind::IsoQuad, 4),
        (ShapeKind::Triangle, 3),
    ];
    for (kind, vertex_count) in expected {
        controller
            .handle_intent(&mut state, AppIntent::CycleShapeKindRequested)
            .expect("Cycle sollte ohne Fehler durchlaufen");
        assert_eq!(state.editor.shape_kind, kind);
        assert_eq!(state.scene.active().vertex_count(), vertex_count);
        let c = state.scene.active().world_centroid();
        assert_relative_eq!(c.x, 60.0, epsilon = 0.01);
        assert_relative_eq!(c.y, 60.0, epsilon = 0.01);
    }
}

#[test]
fn test_new_shape_after_commit_uses_current_kind() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CycleShapeKindRequested)
        .expect("Cycle");
    place_at(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    assert_eq!(state.scene.placed()[0].vertex_count(), 4);
    assert_eq!(state.scene.active().vertex_count(), 4);
}

#[test]
fn test_commit_with_invalid_geometry_reports_shape_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.shape_side_length = f32::NAN;

    let result = controller.update(
        &mut state,
        0.016,
        Vec2::new(10.0, 10.0),
        vec![AppIntent::PrimaryClick],
    );

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ShapeError>(),
        Some(ShapeError::NonFiniteVertex { .. })
    ));
    assert_eq!(state.placed_count(), 0);
}
