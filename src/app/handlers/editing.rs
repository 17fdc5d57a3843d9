//! Handler für Werkzeug-Wechsel.

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::SnapState;

/// Setzt das aktive Editor-Werkzeug und verwirft werkzeugspezifischen Frame-Zustand.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    state.snap = SnapState::default();
    state.hovered_shape = None;
    log::info!("Werkzeug: {}", tool.label());
}
