use super::super::state::EditorTool;
use crate::core::ShapeKind;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Aktive Form um ihren Schwerpunkt drehen
    RotateActiveShape { delta_degrees: f32 },
    /// Rate-Limit-Timer der gehaltenen Rotation zurücksetzen
    ResetRotationTimer,
    /// Form-Typ setzen und aktive Form am aktuellen Schwerpunkt neu erzeugen
    SetShapeKind { kind: ShapeKind },
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Aktive Form (ggf. eingerastet) platzieren und neue Form an der Mausposition erzeugen
    CommitActiveShape { world_pos: glam::Vec2 },
    /// Zuletzt platzierte Form entfernen
    UndoLastPlacement,
    /// Oberste Form unter `world_pos` mit der aktuellen Palettenfarbe füllen
    FillShapeAt { world_pos: glam::Vec2 },
    /// Füllung der obersten Form unter `world_pos` entfernen
    ClearFillAt { world_pos: glam::Vec2 },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    PanCamera { delta: glam::Vec2 },
    /// Kamera um die Viewport-Mitte zoomen
    ZoomCamera { factor: f32 },
    /// Paletten-Index der Füllfarbe setzen
    SetFillColorIndex { index: usize },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
}
