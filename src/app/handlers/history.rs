//! Handler für Undo.

use crate::app::AppState;
use crate::core::SnapState;

/// Entfernt die zuletzt platzierte Form, falls vorhanden.
///
/// Snap- und Hover-Indizes können danach auf die entfernte Form zeigen und
/// werden verworfen; der nächste Frame berechnet sie neu.
pub fn undo(state: &mut AppState) {
    if state.scene.undo_last().is_some() {
        state.snap = SnapState::default();
        state.hovered_shape = None;
        log::info!(
            "Undo ausgeführt, {} Formen verbleiben",
            state.scene.placed_count()
        );
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}
