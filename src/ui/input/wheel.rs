//! Mausrad-Rotation der aktiven Form.

use super::InputState;
use crate::app::{AppIntent, RotationDirection};

impl InputState {
    /// Ein Rotationsschritt pro Frame mit Mausrad-Bewegung.
    ///
    /// Rad nach oben dreht gegen, Rad nach unten im Uhrzeigersinn.
    pub(crate) fn handle_wheel(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll > 0.0 {
            events.push(AppIntent::RotateStep {
                direction: RotationDirection::CounterClockwise,
            });
        } else if scroll < 0.0 {
            events.push(AppIntent::RotateStep {
                direction: RotationDirection::Clockwise,
            });
        }
    }
}
