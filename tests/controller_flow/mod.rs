mod fill_and_view;
mod placement;

use glam::Vec2;
use tessellation_editor::{AppController, AppIntent, AppState, RenderScene};

/// Führt einen Frame mit fester Zeit aus.
pub fn frame(
    controller: &mut AppController,
    state: &mut AppState,
    mouse: Vec2,
    intents: Vec<AppIntent>,
) -> RenderScene {
    controller
        .update(state, 0.016, mouse, intents)
        .expect("Frame sollte ohne Fehler durchlaufen")
}

/// Platziert eine Form an `pos` (Maus hinbewegen, klicken).
pub fn place_at(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    frame(controller, state, pos, Vec::new());
    frame(controller, state, pos, vec![AppIntent::PrimaryClick]);
}
