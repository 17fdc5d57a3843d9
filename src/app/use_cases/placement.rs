//! Use-Case-Funktionen für das Platzieren der aktiven Form.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{apply_snap, best_snap, ShapeKind, SnapState};

/// Dreht die aktive Form um ihren Schwerpunkt.
pub fn rotate_active(state: &mut AppState, delta_degrees: f32) {
    state.scene.active_mut().rotate(delta_degrees);
    log::debug!(
        "Aktive Form gedreht auf {:.1}°",
        state.scene.active().rotation_degrees()
    );
}

/// Setzt den Rate-Limit-Timer der gehaltenen Rotation zurück.
pub fn reset_rotation_timer(state: &mut AppState) {
    state.editor.time_since_last_rotation = 0.0;
}

/// Wechselt den Form-Typ und erzeugt die aktive Form neu am bisherigen Schwerpunkt.
///
/// Schlägt die Erzeugung fehl, bleiben Typ und aktive Form unverändert.
pub fn set_shape_kind(state: &mut AppState, kind: ShapeKind) -> anyhow::Result<()> {
    let anchor = state.scene.active().world_centroid();
    let shape = kind.try_create(anchor, state.options.shape_side_length)?;
    state.editor.shape_kind = kind;
    state.scene.replace_active(shape);
    log::info!("Form-Typ: {}", kind.label());
    Ok(())
}

/// Platziert die aktive Form an `world_pos`.
///
/// Liegt das beste Snap-Paar gegenüber der nächstgelegenen Form unter der
/// Schwelle, wird die Form vorher eingerastet. Danach entsteht eine neue
/// aktive Form des aktuellen Typs an `world_pos`. Lässt sich diese nicht
/// erzeugen, wird nichts platziert.
pub fn commit_active(state: &mut AppState, world_pos: Vec2) -> anyhow::Result<()> {
    let next = state
        .editor
        .shape_kind
        .try_create(world_pos, state.options.shape_side_length)?;
    let max_distance = state.options.snap_distance_max;
    state.scene.active_mut().move_to(world_pos);

    let snap = best_snap(
        state.scene.active(),
        state.scene.placed(),
        world_pos,
        max_distance,
    );
    if let Some(pair) = snap.best.filter(|pair| pair.distance < max_distance) {
        apply_snap(state.scene.active_mut(), &pair);
        log::debug!(
            "Form eingerastet: {:?} → {:?} (Distanz {:.2})",
            pair.active_point,
            pair.target_point,
            pair.distance
        );
    }

    let index = state.scene.commit_active(next);
    state.snap = SnapState::default();

    log::info!(
        "Form #{} platziert bei {:?}",
        index,
        state.scene.placed()[index].world_centroid()
    );
    Ok(())
}

/// Lässt die aktive Form der Maus folgen.
pub fn follow_mouse(state: &mut AppState, world_pos: Vec2) {
    state.scene.active_mut().move_to(world_pos);
}

/// Berechnet das Snap-Ergebnis des Frames frisch; ohne Kandidaten bleibt `best` leer.
pub fn refresh_snap(state: &mut AppState) {
    state.snap = best_snap(
        state.scene.active(),
        state.scene.placed(),
        state.frame.mouse_world,
        state.options.snap_distance_max,
    );
}
