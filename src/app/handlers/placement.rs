//! Handler für Rotation, Form-Typ und Platzieren der aktiven Form.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ShapeKind;

/// Dreht die aktive Form.
pub fn rotate_active(state: &mut AppState, delta_degrees: f32) {
    use_cases::placement::rotate_active(state, delta_degrees);
}

/// Setzt den Rotations-Timer zurück.
pub fn reset_rotation_timer(state: &mut AppState) {
    use_cases::placement::reset_rotation_timer(state);
}

/// Wechselt den Form-Typ der aktiven Form.
pub fn set_shape_kind(state: &mut AppState, kind: ShapeKind) -> anyhow::Result<()> {
    use_cases::placement::set_shape_kind(state, kind)
}

/// Platziert die aktive Form (mit Commit-Snap).
pub fn commit(state: &mut AppState, world_pos: glam::Vec2) -> anyhow::Result<()> {
    use_cases::placement::commit_active(state, world_pos)
}
