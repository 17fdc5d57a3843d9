use approx::assert_relative_eq;
use glam::Vec2;
use tessellation_editor::app::{CycleDirection, PanDirection};
use tessellation_editor::{AppController, AppIntent, AppState, DrawCommand, EditorTool};

use super::{frame, place_at};

fn enter_fill_mode(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::CycleToolRequested)
        .expect("Werkzeugwechsel sollte ohne Fehler durchlaufen");
    assert_eq!(state.editor.active_tool, EditorTool::Fill);
}

#[test]
fn test_fill_click_colors_shape_under_mouse() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_at(&mut controller, &mut state, Vec2::ZERO);
    enter_fill_mode(&mut controller, &mut state);

    frame(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 2.0),
        vec![
            AppIntent::CycleFillColor {
                direction: CycleDirection::Next,
            },
            AppIntent::PrimaryClick,
        ],
    );

    assert_eq!(state.placed_count(), 1, "Füllen darf nichts platzieren");
    assert_eq!(
        state.scene.placed()[0].fill_color(),
        Some(state.options.fill_palette[1])
    );
    assert_eq!(state.hovered_shape, Some(0));
}

#[test]
fn test_fill_mode_hides_active_shape_and_snap_markers() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_at(&mut controller, &mut state, Vec2::ZERO);
    enter_fill_mode(&mut controller, &mut state);

    let scene = frame(&mut controller, &mut state, Vec2::new(0.0, 2.0), Vec::new());

    assert!(!state.snap.has_snap());
    // Nur der Umriss der platzierten Form (3 Kanten)
    assert_eq!(scene.commands.len(), 3);
}

#[test]
fn test_filled_shape_draws_fill_before_outline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_at(&mut controller, &mut state, Vec2::ZERO);
    enter_fill_mode(&mut controller, &mut state);

    let scene = frame(
        &mut controller,
        &mut state,
        Vec2::ZERO,
        vec![AppIntent::PrimaryClick],
    );

    assert!(matches!(
        scene.commands[0],
        DrawCommand::FillTriangle { .. }
    ));
}

#[test]
fn test_clear_fill_removes_color() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_at(&mut controller, &mut state, Vec2::ZERO);
    enter_fill_mode(&mut controller, &mut state);

    frame(&mut controller, &mut state, Vec2::ZERO, vec![AppIntent::PrimaryClick]);
    assert!(state.scene.placed()[0].is_filled());

    frame(
        &mut controller,
        &mut state,
        Vec2::ZERO,
        vec![AppIntent::ClearFillRequested],
    );
    assert!(!state.scene.placed()[0].is_filled());
}

#[test]
fn test_switching_back_to_place_mode_resumes_placement() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    enter_fill_mode(&mut controller, &mut state);

    frame(&mut controller, &mut state, Vec2::ZERO, vec![AppIntent::PrimaryClick]);
    assert_eq!(state.placed_count(), 0);

    controller
        .handle_intent(&mut state, AppIntent::CycleToolRequested)
        .expect("Werkzeugwechsel");
    place_at(&mut controller, &mut state, Vec2::new(5.0, 5.0));
    assert_eq!(state.placed_count(), 1);
}

#[test]
fn test_pan_scales_with_elapsed_time() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .update(
            &mut state,
            0.5,
            Vec2::ZERO,
            vec![
                AppIntent::PanHeld {
                    direction: PanDirection::Left,
                },
                AppIntent::PanHeld {
                    direction: PanDirection::Down,
                },
            ],
        )
        .expect("Frame");

    assert_relative_eq!(state.view.camera.position.x, 50.0);
    assert_relative_eq!(state.view.camera.position.y, -50.0);
}

#[test]
fn test_zoom_in_and_out_use_configured_factors() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let scene = frame(
        &mut controller,
        &mut state,
        Vec2::ZERO,
        vec![AppIntent::ZoomInRequested],
    );
    assert_relative_eq!(state.view.camera.zoom, 1.1);
    assert_relative_eq!(scene.camera.zoom, 1.1);

    frame(
        &mut controller,
        &mut state,
        Vec2::ZERO,
        vec![AppIntent::ZoomOutRequested],
    );
    assert_relative_eq!(state.view.camera.zoom, 0.99, epsilon = 1e-5);
}
