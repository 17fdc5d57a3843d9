use glam::Vec2;

/// Eingaben des aktuell verarbeiteten Frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameState {
    /// Vergangene Zeit seit dem letzten Frame in Sekunden
    pub elapsed_secs: f32,
    /// Mausposition in Weltkoordinaten
    pub mouse_world: Vec2,
}
