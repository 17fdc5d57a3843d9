use glam::Vec2;

/// Sichtbare Drehrichtung auf der Zeichenfläche (y-Achse nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Im Uhrzeigersinn ('.' bzw. Mausrad nach unten)
    Clockwise,
    /// Gegen den Uhrzeigersinn (',' bzw. Mausrad nach oben)
    CounterClockwise,
}

impl RotationDirection {
    /// Vorzeichen des Rotationsschritts.
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}

/// Pfeiltasten-Richtung für das Verschieben der Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Einheitsvektor, der auf die Kamera-Position addiert wird.
    ///
    /// Links/oben verschieben die Kamera in positive Richtung, der Inhalt
    /// wandert dadurch in Pfeilrichtung über den Bildschirm.
    pub fn unit(self) -> Vec2 {
        match self {
            PanDirection::Left => Vec2::X,
            PanDirection::Right => Vec2::NEG_X,
            PanDirection::Up => Vec2::Y,
            PanDirection::Down => Vec2::NEG_Y,
        }
    }
}

/// Richtung beim Durchschalten einer Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Previous,
    Next,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Rotationstaste ist in diesem Frame gedrückt (rate-limitiert)
    RotateHeld { direction: RotationDirection },
    /// Einzelner Rotationsschritt (Mausrad, sofort)
    RotateStep { direction: RotationDirection },
    /// Nächsten Form-Typ wählen
    CycleShapeKindRequested,
    /// Zwischen Platzieren und Füllen wechseln
    CycleToolRequested,
    /// Zuletzt platzierte Form entfernen
    UndoRequested,
    /// Primärklick an der aktuellen Mausposition
    PrimaryClick,
    /// Füllung der Form unter der Maus entfernen
    ClearFillRequested,
    /// Pfeiltaste ist in diesem Frame gedrückt
    PanHeld { direction: PanDirection },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Füllfarbe in der Palette wechseln
    CycleFillColor { direction: CycleDirection },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
}
