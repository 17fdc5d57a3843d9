//! Reine 2D-Geometrie-Hilfsfunktionen auf `glam::Vec2`.

use glam::Vec2;

/// Anzahl Nachkommastellen, auf die abgeleitete Welt-Koordinaten gerundet werden.
pub const COORDINATE_DECIMALS: i32 = 2;

/// Rundet einen Wert auf `decimals` Nachkommastellen.
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let multiplier = 10f32.powi(decimals);
    (value * multiplier).round() / multiplier
}

/// Rundet beide Koordinaten eines Punkts auf `decimals` Nachkommastellen.
pub fn round_point(point: Vec2, decimals: i32) -> Vec2 {
    Vec2::new(round_to(point.x, decimals), round_to(point.y, decimals))
}

/// Rundet einen Punkt auf die Standard-Genauigkeit der Welt-Geometrie.
#[inline]
pub fn round_world(point: Vec2) -> Vec2 {
    round_point(point, COORDINATE_DECIMALS)
}

/// Arithmetisches Mittel aller Punkte.
///
/// Gibt `Vec2::ZERO` für eine leere Punktliste zurück.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    let sum: Vec2 = points.iter().copied().sum();
    sum / points.len() as f32
}

/// Dreht `point` um `center` (Standard-Rotationsmatrix, Grad).
///
/// Bei nach unten zeigender y-Achse erscheint ein positiver Winkel
/// auf dem Bildschirm im Uhrzeigersinn.
pub fn rotate_about(point: Vec2, center: Vec2, angle_degrees: f32) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let rel = point - center;
    Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos) + center
}

/// Mittelpunkt einer Strecke.
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Normalisiert einen Winkel in Grad auf das Intervall (-360, 360].
///
/// Der Rest wird in einem Schritt exakt gebildet (`%` ist für Floats exakt),
/// nicht-endliche Winkel ergeben 0.
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees % 360.0;
    if wrapped == 0.0 {
        if degrees > 0.0 {
            360.0
        } else {
            0.0
        }
    } else {
        wrapped
    }
}
