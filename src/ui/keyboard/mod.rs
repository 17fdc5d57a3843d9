//! Keyboard-Shortcuts für den Viewport.
//!
//! Gehaltene Tasten (Rotation, Pan) erzeugen in jedem Frame einen Intent,
//! das Rate-Limit liegt im App-Layer. Alle übrigen Tasten reagieren nur
//! auf das Drücken.

use crate::app::{AppIntent, CycleDirection, PanDirection, RotationDirection};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Zoom (Q / A)
    let (key_q_pressed, key_a_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::A),
        )
    });

    if key_q_pressed {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_a_pressed {
        events.push(AppIntent::ZoomOutRequested);
    }

    // Rotation (',' / '.', gehalten)
    let (comma_down, period_down) = ui.input(|i| {
        (
            i.key_down(egui::Key::Comma),
            i.key_down(egui::Key::Period),
        )
    });

    if comma_down {
        events.push(AppIntent::RotateHeld {
            direction: RotationDirection::CounterClockwise,
        });
    }
    if period_down {
        events.push(AppIntent::RotateHeld {
            direction: RotationDirection::Clockwise,
        });
    }

    // Pan (Pfeiltasten, gehalten)
    let pan_keys = [
        (egui::Key::ArrowLeft, PanDirection::Left),
        (egui::Key::ArrowRight, PanDirection::Right),
        (egui::Key::ArrowUp, PanDirection::Up),
        (egui::Key::ArrowDown, PanDirection::Down),
    ];
    for (key, direction) in pan_keys {
        if ui.input(|i| i.key_down(key)) {
            events.push(AppIntent::PanHeld { direction });
        }
    }

    // Form-Typ, Werkzeug, Füllung, Palette
    let (space_pressed, tab_pressed, delete_pressed, open_bracket_pressed, close_bracket_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::Tab),
                i.key_pressed(egui::Key::Delete),
                i.key_pressed(egui::Key::OpenBracket),
                i.key_pressed(egui::Key::CloseBracket),
            )
        });

    if space_pressed {
        events.push(AppIntent::CycleShapeKindRequested);
    }
    if tab_pressed {
        events.push(AppIntent::CycleToolRequested);
    }
    if delete_pressed {
        events.push(AppIntent::ClearFillRequested);
    }
    if open_bracket_pressed {
        events.push(AppIntent::CycleFillColor {
            direction: CycleDirection::Previous,
        });
    }
    if close_bracket_pressed {
        events.push(AppIntent::CycleFillColor {
            direction: CycleDirection::Next,
        });
    }

    events
}
