use glam::Vec2;

use crate::app::CommandLog;
use crate::core::SnapState;
use crate::shared::EditorOptions;

use super::{EditorToolState, FrameState, SceneState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Platzierte Formen und aktive Form
    pub scene: SceneState,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Eingaben des aktuellen Frames
    pub frame: FrameState,
    /// Snap-Ergebnis des aktuellen Frames (nur im Platzieren-Modus befüllt)
    pub snap: SnapState,
    /// Oberste platzierte Form unter der Maus (nur im Füll-Modus)
    pub hovered_shape: Option<usize>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Schwellen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen, leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let editor = EditorToolState::new();
        let scene = SceneState::new(editor.shape_kind, Vec2::ZERO, options.shape_side_length);
        Self {
            scene,
            view: ViewState::new(),
            editor,
            frame: FrameState::default(),
            snap: SnapState::default(),
            hovered_shape: None,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl platzierter Formen zurück (für UI-Anzeige)
    pub fn placed_count(&self) -> usize {
        self.scene.placed_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.scene.placed_count() > 0
    }

    /// Aktuelle Füllfarbe aus der Palette.
    pub fn current_fill_color(&self) -> Option<[f32; 4]> {
        self.options.palette_color(self.editor.fill_color_index)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
