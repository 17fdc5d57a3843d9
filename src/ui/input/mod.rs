//! Viewport-Input-Handling: Maus, Mausrad und Tastatur → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks` — Links-/Rechtsklick (Platzieren/Füllen, Undo)
//! - `wheel` — Mausrad-Rotation

mod clicks;
mod wheel;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use glam::Vec2;

/// Eingaben eines Frames für `AppController::update`.
#[derive(Debug, Clone, Default)]
pub struct ViewportInput {
    /// Gesammelte Intents in Verarbeitungsreihenfolge
    pub intents: Vec<AppIntent>,
    /// Mausposition in Weltkoordinaten
    pub mouse_world: Vec2,
}

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte bekannte Mausposition (Welt), falls der Zeiger den Viewport verlässt
    last_mouse_world: Vec2,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_mouse_world: Vec2::ZERO,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input.
    ///
    /// Reihenfolge der Intents: Viewport-Größe, Tastatur, Klicks, Mausrad.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
    ) -> ViewportInput {
        if let Some(pointer_pos) = response.hover_pos() {
            self.last_mouse_world = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
        }

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));
        self.handle_clicks(ui, response, &mut events);
        self.handle_wheel(ui, response, &mut events);

        ViewportInput {
            intents: events,
            mouse_world: self.last_mouse_world,
        }
    }
}

/// Rechnet eine Screen-Position (egui, absolut) in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    local_to_world(local, viewport_size, camera)
}

/// Rechnet eine viewport-lokale Pixelposition in Weltkoordinaten um.
fn local_to_world(local: egui::Vec2, viewport_size: [f32; 2], camera: &Camera2D) -> Vec2 {
    camera.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
