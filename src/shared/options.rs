//! Zentrale Konfiguration für den Tessellation-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Formen ──────────────────────────────────────────────────────────

/// Seitenlänge neu erzeugter Formen (Welteinheiten).
pub const SHAPE_SIDE_LENGTH: f32 = 30.0;

// ── Snap ────────────────────────────────────────────────────────────

/// Snap-Schwelle (Welteinheiten): Paare mit Distanz darunter rasten beim Commit ein.
pub const SNAP_DISTANCE_MAX: f32 = 5.0;
/// Radius der Snap-Marker in Welteinheiten.
pub const SNAP_MARKER_RADIUS: f32 = 2.0;

// ── Rotation ────────────────────────────────────────────────────────

/// Rotationsschritt in Grad pro Tastendruck bzw. Mausrad-Raste.
pub const ROTATION_STEP_DEGREES: f32 = 15.0;
/// Mindestabstand zwischen zwei Rotationen bei gehaltener Taste (Sekunden).
pub const ROTATION_INTERVAL_SECS: f32 = 0.1;

// ── Kamera ──────────────────────────────────────────────────────────

/// Pan-Geschwindigkeit in Welteinheiten pro Sekunde.
pub const CAMERA_PAN_SPEED: f32 = 100.0;
/// Zoom-Faktor für "Hineinzoomen".
pub const CAMERA_ZOOM_IN_FACTOR: f32 = 1.1;
/// Zoom-Faktor für "Herauszoomen".
pub const CAMERA_ZOOM_OUT_FACTOR: f32 = 0.9;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 20.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Umriss-Stärke platzierter Formen (Anzahl paralleler Linien).
pub const OUTLINE_THICKNESS_PLACED: u32 = 1;
/// Umriss-Stärke der aktiven Form.
pub const OUTLINE_THICKNESS_ACTIVE: u32 = 1;
/// Hintergrundfarbe (RGBA: Grau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
/// Umrissfarbe platzierter Formen (RGBA: Weiß).
pub const PLACED_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Umrissfarbe der aktiven Form (RGBA: Blau).
pub const ACTIVE_COLOR: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
/// Marker-Farbe auf der Ziel-Form (RGBA: Gelb).
pub const SNAP_TARGET_COLOR: [f32; 4] = [0.99, 0.98, 0.0, 1.0];
/// Marker-Farbe auf der aktiven Form (RGBA: Grün).
pub const SNAP_ACTIVE_COLOR: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
/// Umrissfarbe der Form unter der Maus im Füll-Modus (RGBA: Orange).
pub const HOVER_COLOR: [f32; 4] = [1.0, 0.63, 0.0, 1.0];

/// Standard-Füllpalette.
pub const FILL_PALETTE: [[f32; 4]; 8] = [
    [0.9, 0.16, 0.22, 1.0],
    [1.0, 0.63, 0.0, 1.0],
    [0.99, 0.98, 0.0, 1.0],
    [0.0, 0.89, 0.19, 1.0],
    [0.4, 0.75, 1.0, 1.0],
    [0.0, 0.47, 0.95, 1.0],
    [0.78, 0.48, 1.0, 1.0],
    [0.5, 0.42, 0.31, 1.0],
];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `tessellation_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Formen ──────────────────────────────────────────────────
    /// Seitenlänge neuer Formen in Welteinheiten
    pub shape_side_length: f32,

    // ── Snap ────────────────────────────────────────────────────
    /// Snap-Schwelle in Welteinheiten (strikt kleiner)
    pub snap_distance_max: f32,
    /// Radius der Snap-Marker in Welteinheiten
    pub snap_marker_radius: f32,

    // ── Rotation ────────────────────────────────────────────────
    /// Rotationsschritt in Grad
    pub rotation_step_degrees: f32,
    /// Rate-Limit für gehaltene Rotationstasten in Sekunden
    pub rotation_interval_secs: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Pan-Geschwindigkeit (Welteinheiten/Sekunde)
    pub camera_pan_speed: f32,
    /// Zoom-Faktor beim Hineinzoomen
    pub camera_zoom_in_factor: f32,
    /// Zoom-Faktor beim Herauszoomen
    pub camera_zoom_out_factor: f32,
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Umriss-Stärke platzierter Formen
    pub outline_thickness_placed: u32,
    /// Umriss-Stärke der aktiven Form
    pub outline_thickness_active: u32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Umrissfarbe platzierter Formen
    pub placed_color: [f32; 4],
    /// Umrissfarbe der aktiven Form
    pub active_color: [f32; 4],
    /// Snap-Marker auf der Ziel-Form
    pub snap_target_color: [f32; 4],
    /// Snap-Marker auf der aktiven Form
    pub snap_active_color: [f32; 4],
    /// Hervorhebung der Form unter der Maus (Füll-Modus)
    pub hover_color: [f32; 4],
    /// Auswählbare Füllfarben
    pub fill_palette: Vec<[f32; 4]>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shape_side_length: SHAPE_SIDE_LENGTH,

            snap_distance_max: SNAP_DISTANCE_MAX,
            snap_marker_radius: SNAP_MARKER_RADIUS,

            rotation_step_degrees: ROTATION_STEP_DEGREES,
            rotation_interval_secs: ROTATION_INTERVAL_SECS,

            camera_pan_speed: CAMERA_PAN_SPEED,
            camera_zoom_in_factor: CAMERA_ZOOM_IN_FACTOR,
            camera_zoom_out_factor: CAMERA_ZOOM_OUT_FACTOR,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,

            outline_thickness_placed: OUTLINE_THICKNESS_PLACED,
            outline_thickness_active: OUTLINE_THICKNESS_ACTIVE,
            background_color: BACKGROUND_COLOR,
            placed_color: PLACED_COLOR,
            active_color: ACTIVE_COLOR,
            snap_target_color: SNAP_TARGET_COLOR,
            snap_active_color: SNAP_ACTIVE_COLOR,
            hover_color: HOVER_COLOR,
            fill_palette: FILL_PALETTE.to_vec(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tessellation-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tessellation_editor.toml")
    }

    /// Füllfarbe zum Paletten-Index (Index wird in die Palette gefaltet).
    ///
    /// `None` nur bei leerer Palette.
    pub fn palette_color(&self, index: usize) -> Option<[f32; 4]> {
        if self.fill_palette.is_empty() {
            return None;
        }
        Some(self.fill_palette[index % self.fill_palette.len()])
    }

    /// Ersetzt unbrauchbare Werte aus einer Datei durch die Standardwerte.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.fill_palette.is_empty() {
            log::warn!("Leere Füllpalette in Optionen, verwende Standardpalette");
            self.fill_palette = defaults.fill_palette;
        }
        if !(self.camera_zoom_min > 0.0 && self.camera_zoom_min <= self.camera_zoom_max) {
            log::warn!(
                "Ungültige Zoom-Grenzen {}..{}, verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = defaults.camera_zoom_min;
            self.camera_zoom_max = defaults.camera_zoom_max;
        }
        if !(self.snap_distance_max >= 0.0 && self.snap_distance_max.is_finite()) {
            log::warn!("Ungültige Snap-Schwelle, verwende Standardwert");
            self.snap_distance_max = defaults.snap_distance_max;
        }
        if !(self.shape_side_length > 0.0 && self.shape_side_length.is_finite()) {
            log::warn!(
                "Ungültige Kantenlänge {}, verwende Standardwert",
                self.shape_side_length
            );
            self.shape_side_length = defaults.shape_side_length;
        }
        if !(self.rotation_step_degrees > 0.0 && self.rotation_step_degrees <= 360.0) {
            log::warn!(
                "Rotationsschritt {}° außerhalb (0, 360], verwende Standardwert",
                self.rotation_step_degrees
            );
            self.rotation_step_degrees = defaults.rotation_step_degrees;
        }
        if !(self.rotation_interval_secs >= 0.0 && self.rotation_interval_secs.is_finite()) {
            log::warn!(
                "Ungültiges Rotations-Intervall {}, verwende Standardwert",
                self.rotation_interval_secs
            );
            self.rotation_interval_secs = defaults.rotation_interval_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_relative_eq!(opts.shape_side_length, 30.0);
        assert_relative_eq!(opts.snap_distance_max, 5.0);
        assert_relative_eq!(opts.rotation_step_degrees, 15.0);
        assert_relative_eq!(opts.rotation_interval_secs, 0.1);
        assert!(opts.fill_palette.len() >= 6);
    }

    #[test]
    fn save_and_load_roundtrip_keeps_changes() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("tessellation_editor.toml");

        let mut opts = EditorOptions::default();
        opts.snap_distance_max = 8.5;
        opts.fill_palette = vec![[0.1, 0.2, 0.3, 1.0]];
        opts.save_to_file(&path).expect("Speichern erwartet");

        let loaded = EditorOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let loaded = EditorOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("kaputt.toml");
        std::fs::write(&path, "snap_distance_max = \"viel\"").expect("Schreiben");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn partial_file_uses_serde_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("teilweise.toml");
        std::fs::write(&path, "rotation_step_degrees = 5.0\nfill_palette = []\n")
            .expect("Schreiben");

        let loaded = EditorOptions::load_from_file(&path);
        assert_relative_eq!(loaded.rotation_step_degrees, 5.0);
        assert_relative_eq!(loaded.snap_distance_max, SNAP_DISTANCE_MAX);
        assert_eq!(loaded.fill_palette, FILL_PALETTE.to_vec());
    }

    #[test]
    fn unusable_shape_and_rotation_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("grenzwerte.toml");
        std::fs::write(
            &path,
            "shape_side_length = 0.0\n\
             rotation_step_degrees = 1e10\n\
             rotation_interval_secs = nan\n\
             snap_distance_max = inf\n",
        )
        .expect("Schreiben");

        let loaded = EditorOptions::load_from_file(&path);
        assert_relative_eq!(loaded.shape_side_length, SHAPE_SIDE_LENGTH);
        assert_relative_eq!(loaded.rotation_step_degrees, ROTATION_STEP_DEGREES);
        assert_relative_eq!(loaded.rotation_interval_secs, ROTATION_INTERVAL_SECS);
        assert_relative_eq!(loaded.snap_distance_max, SNAP_DISTANCE_MAX);
    }

    #[test]
    fn palette_color_wraps_index() {
        let opts = EditorOptions::default();
        let n = opts.fill_palette.len();
        assert_eq!(opts.palette_color(n + 1), opts.palette_color(1));
    }
}
