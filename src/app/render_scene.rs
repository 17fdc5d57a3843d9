//! Builder für Render-Szenen aus dem AppState.

use crate::app::{AppState, EditorTool};
use crate::core::{DrawList, DrawTarget};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Zeichenreihenfolge: platzierte Formen (älteste zuerst), danach im
/// Platzieren-Modus die aktive Form und die Snap-Marker aller Kandidaten
/// (gelb auf der Ziel-Form, grün auf der aktiven Form).
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let mut list = DrawList::new();

    for (index, shape) in state.scene.placed().iter().enumerate() {
        let color = if state.hovered_shape == Some(index) {
            options.hover_color
        } else {
            options.placed_color
        };
        shape.draw(&mut list, color, options.outline_thickness_placed);
    }

    if state.editor.active_tool == EditorTool::Place {
        state.scene.active().draw(
            &mut list,
            options.active_color,
            options.outline_thickness_active,
        );

        for pair in &state.snap.candidates {
            list.fill_circle(
                pair.target_point,
                options.snap_marker_radius,
                options.snap_target_color,
            );
            list.fill_circle(
                pair.active_point,
                options.snap_marker_radius,
                options.snap_active_color,
            );
        }
    }

    RenderScene {
        camera: state.view.camera,
        viewport_size: state.view.viewport_size,
        background_color: options.background_color,
        commands: list.into_commands(),
    }
}
