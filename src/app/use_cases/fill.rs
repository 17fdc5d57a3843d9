//! Use-Case-Funktionen für den Füll-Modus.

use glam::Vec2;

use crate::app::AppState;

/// Füllt die oberste platzierte Form unter `world_pos` mit der aktuellen Palettenfarbe.
pub fn fill_at(state: &mut AppState, world_pos: Vec2) {
    let Some(color) = state.current_fill_color() else {
        log::debug!("Füllen: Palette ist leer");
        return;
    };
    set_fill_at(state, world_pos, Some(color));
}

/// Entfernt die Füllung der obersten platzierten Form unter `world_pos`.
pub fn clear_fill_at(state: &mut AppState, world_pos: Vec2) {
    set_fill_at(state, world_pos, None);
}

/// Merkt sich die oberste platzierte Form unter der Maus für die Hervorhebung.
pub fn refresh_hover(state: &mut AppState) {
    state.hovered_shape = state.scene.topmost_containing(state.frame.mouse_world);
}

fn set_fill_at(state: &mut AppState, world_pos: Vec2, color: Option<[f32; 4]>) {
    let Some(index) = state.scene.topmost_containing(world_pos) else {
        log::debug!("Füllen: keine Form unter {:?}", world_pos);
        return;
    };
    if let Some(shape) = state.scene.placed_mut(index) {
        shape.set_fill_color(color);
        log::info!("Form #{} Füllung: {:?}", index, color);
    }
}
