//! Render-Szene als expliziter Übergabevertrag zwischen App und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use crate::core::{Camera2D, DrawCommand};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
    /// Zeichenbefehle in Weltkoordinaten, in Zeichenreihenfolge
    pub commands: Vec<DrawCommand>,
}

