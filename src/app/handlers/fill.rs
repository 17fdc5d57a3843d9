//! Handler für den Füll-Modus.

use crate::app::use_cases;
use crate::app::AppState;

/// Füllt die Form unter `world_pos`.
pub fn fill_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::fill::fill_at(state, world_pos);
}

/// Entfernt die Füllung der Form unter `world_pos`.
pub fn clear_fill_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::fill::clear_fill_at(state, world_pos);
}

/// Setzt den Paletten-Index der Füllfarbe.
pub fn set_fill_color_index(state: &mut AppState, index: usize) {
    state.editor.fill_color_index = index;
    log::debug!("Füllfarbe: Paletten-Index {}", index);
}
