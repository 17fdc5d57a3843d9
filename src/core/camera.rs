//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// `position` ist der Welt-Punkt in der Viewport-Mitte, `zoom` die Anzahl
/// Screen-Pixel pro Welteinheit. Beide Achsen zeigen wie im Screen-Raum
/// nach rechts bzw. unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Welt-Position der Viewport-Mitte
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Pixel pro Welteinheit)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level um die Viewport-Mitte, begrenzt auf `[min, max]`.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten (Pixel, Ursprung oben links) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Umkehrung von `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + screen_size * 0.5
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
