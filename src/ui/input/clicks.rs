//! Klick-Events: Links = Platzieren/Füllen, Rechts = Undo.

use super::InputState;
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maustasten-Drücke über dem Viewport.
    ///
    /// Ausgelöst wird beim Drücken, nicht erst beim Loslassen.
    pub(crate) fn handle_clicks(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }

        let (primary, secondary) = ui.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_pressed(egui::PointerButton::Secondary),
            )
        });

        if primary {
            events.push(AppIntent::PrimaryClick);
        }
        if secondary {
            events.push(AppIntent::UndoRequested);
        }
    }
}
