//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Zoomt die Kamera um die Viewport-Mitte, begrenzt auf die Options-Grenzen.
pub fn zoom(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Speichert die aktuelle Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
