use crate::core::ShapeKind;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: aktive Form folgt der Maus, Klick platziert sie
    #[default]
    Place,
    /// Klick füllt die platzierte Form unter der Maus
    Fill,
}

impl EditorTool {
    /// Nächstes Werkzeug im Zyklus.
    pub fn next(self) -> Self {
        match self {
            EditorTool::Place => EditorTool::Fill,
            EditorTool::Fill => EditorTool::Place,
        }
    }

    /// Anzeigename für die Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            EditorTool::Place => "Platzieren",
            EditorTool::Fill => "Füllen",
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Form-Typ neu erzeugter aktiver Formen
    pub shape_kind: ShapeKind,
    /// Index der aktuellen Füllfarbe in der Options-Palette
    pub fill_color_index: usize,
    /// Sekunden seit der letzten Rotation per gehaltener Taste
    pub time_since_last_rotation: f32,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Platzieren, Dreieck).
    pub fn new() -> Self {
        Self::default()
    }
}
