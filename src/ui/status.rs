//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Formen: {}", state.placed_count()));
            ui.add_enabled(state.can_undo(), egui::Label::new("Rückgängig: Rechtsklick"));

            ui.separator();

            ui.label(format!("Werkzeug: {}", state.editor.active_tool.label()));

            ui.separator();

            match state.editor.active_tool {
                EditorTool::Place => {
                    let active = state.scene.active();
                    ui.label(format!(
                        "Form: {} | Rotation: {:.0}°",
                        state.editor.shape_kind.label(),
                        active.rotation_degrees()
                    ));
                    if let Some(best) = state.snap.best {
                        ui.separator();
                        ui.label(format!("Snap: {:.2}", best.distance));
                    }
                }
                EditorTool::Fill => {
                    if let Some(color) = state.current_fill_color() {
                        let swatch = egui::Color32::from_rgba_unmultiplied(
                            (color[0] * 255.0) as u8,
                            (color[1] * 255.0) as u8,
                            (color[2] * 255.0) as u8,
                            (color[3] * 255.0) as u8,
                        );
                        ui.label("Farbe:");
                        ui.colored_label(swatch, "■");
                    }
                }
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Maus: ({:.1}, {:.1})",
                    state.frame.mouse_world.x, state.frame.mouse_world.y
                ));
            });
        });
    });
}
