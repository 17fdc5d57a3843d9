//! Formen-Tabelle: Shape-Typ → Eckpunkt-Generator.

use std::f32::consts::PI;

use glam::Vec2;

use super::shape::{Shape, ShapeError};

/// Standard-Seitenlänge neuer Formen (Welteinheiten).
pub const DEFAULT_SIDE_LENGTH: f32 = 30.0;

/// Auswählbare Form-Typen (zyklisch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    /// Gleichseitiges Dreieck
    #[default]
    Triangle,
    /// Quadrat
    Square,
    /// Regelmäßiges Sechseck
    Hexagon,
    /// Raute aus zwei 30°/75°/75°-Dreiecken mit gemeinsamer Basis
    IsoQuad,
}

impl ShapeKind {
    /// Alle Typen in Zyklus-Reihenfolge.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Hexagon,
        ShapeKind::IsoQuad,
    ];

    /// Nächster Typ im Zyklus.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Triangle => ShapeKind::Square,
            ShapeKind::Square => ShapeKind::Hexagon,
            ShapeKind::Hexagon => ShapeKind::IsoQuad,
            ShapeKind::IsoQuad => ShapeKind::Triangle,
        }
    }

    /// Anzeigename für die Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "Dreieck",
            ShapeKind::Square => "Quadrat",
            ShapeKind::Hexagon => "Sechseck",
            ShapeKind::IsoQuad => "Raute",
        }
    }

    /// Eckpunkte der Form mit Schwerpunkt auf `anchor`.
    pub fn vertices(self, anchor: Vec2, side_length: f32) -> Vec<Vec2> {
        let offsets = match self {
            ShapeKind::Triangle => triangle_offsets(side_length),
            ShapeKind::Square => square_offsets(side_length),
            ShapeKind::Hexagon => hexagon_offsets(side_length),
            ShapeKind::IsoQuad => iso_quad_offsets(side_length),
        };
        offsets.into_iter().map(|o| anchor + o).collect()
    }

    /// Erzeugt eine neue, untransformierte Form dieses Typs an `anchor`.
    pub fn create(self, anchor: Vec2, side_length: f32) -> Shape {
        Shape::from_polygon(self.vertices(anchor, side_length))
    }

    /// Wie [`ShapeKind::create`], prüft aber die erzeugten Eckpunkte.
    ///
    /// Schlägt bei nicht-endlichem `anchor` oder `side_length` fehl.
    pub fn try_create(self, anchor: Vec2, side_length: f32) -> Result<Shape, ShapeError> {
        Shape::new(self.vertices(anchor, side_length))
    }
}

fn triangle_offsets(side: f32) -> Vec<Vec2> {
    let height = 3f32.sqrt() / 2.0 * side;
    vec![
        Vec2::new(0.0, -2.0 / 3.0 * height),
        Vec2::new(-side / 2.0, height / 3.0),
        Vec2::new(side / 2.0, height / 3.0),
    ]
}

fn square_offsets(side: f32) -> Vec<Vec2> {
    let half = side / 2.0;
    vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
}

fn hexagon_offsets(side: f32) -> Vec<Vec2> {
    (0..6)
        .map(|i| {
            let (sin, cos) = (PI / 3.0 * i as f32).sin_cos();
            Vec2::new(cos * side, sin * side)
        })
        .collect()
}

fn iso_quad_offsets(side: f32) -> Vec<Vec2> {
    let apex = 75f32.to_radians();
    let height = side * apex.sin();
    let base = 2.0 * side * apex.cos();
    vec![
        Vec2::new(-base / 2.0, 0.0),
        Vec2::new(0.0, -height),
        Vec2::new(base / 2.0, 0.0),
        Vec2::new(0.0, height),
    ]
}
