//! Polygon-Form mit akkumulierter Transformation und lazy abgeleiteter Welt-Geometrie.
//!
//! Eine `Shape` speichert ihre Original-Eckpunkte unverändert und dazu die
//! Gesamt-Transformation (Translation + Rotation um den Original-Schwerpunkt).
//! Welt-Eckpunkte, Welt-Schwerpunkt und Snap-Punkte werden erst beim Lesen
//! berechnet und bis zur nächsten Transformation zwischengespeichert. Jede
//! Ableitung startet frisch bei den Original-Eckpunkten und rundet auf zwei
//! Nachkommastellen, sodass sich bei wiederholtem Drehen kein Float-Fehler
//! aufschaukelt.

use std::cell::OnceCell;

use glam::Vec2;
use thiserror::Error;

use super::draw::DrawTarget;
use super::geometry::{centroid, midpoint, normalize_degrees, rotate_about, round_world};

/// Minimale Eckpunkt-Anzahl eines Polygons.
pub const MIN_VERTICES: usize = 3;

/// Obergrenze der parallelen Umriss-Linien pro Kante.
pub const MAX_OUTLINE_LINES: u32 = 64;

/// Fehler beim Erzeugen einer Form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Weniger als drei Eckpunkte übergeben
    #[error("Ungültige Geometrie: Polygon braucht mindestens 3 Eckpunkte, erhalten: {count}")]
    TooFewVertices { count: usize },
    /// Eckpunkt mit NaN- oder unendlicher Koordinate
    #[error("Ungültige Geometrie: Eckpunkt {index} ist nicht endlich")]
    NonFiniteVertex { index: usize },
}

/// Abgeleitete Welt-Geometrie (Cache-Inhalt).
#[derive(Debug, Clone)]
struct WorldGeometry {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    /// Eckpunkte gefolgt von den Kanten-Mittelpunkten
    snap_points: Vec<Vec2>,
}

/// Platzierbare Polygon-Form.
#[derive(Debug, Clone)]
pub struct Shape {
    original_vertices: Vec<Vec2>,
    original_centroid: Vec2,
    translation: Vec2,
    rotation_degrees: f32,
    fill_color: Option<[f32; 4]>,
    /// Leer = dirty; wird bei jeder Transformation verworfen
    world: OnceCell<WorldGeometry>,
}

impl Shape {
    /// Erstellt eine Form aus einem Polygon (mindestens drei Eckpunkte,
    /// konsistente Umlaufrichtung).
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteVertex { index });
        }
        Ok(Self::from_polygon(vertices))
    }

    /// Konstruktor für Polygone, deren Eckpunkt-Anzahl bereits feststeht
    /// (Formen-Tabelle in `shape_kind`).
    pub(crate) fn from_polygon(vertices: Vec<Vec2>) -> Self {
        debug_assert!(vertices.len() >= MIN_VERTICES);
        let original_centroid = centroid(&vertices);
        Self {
            original_vertices: vertices,
            original_centroid,
            translation: Vec2::ZERO,
            rotation_degrees: 0.0,
            fill_color: None,
            world: OnceCell::new(),
        }
    }

    /// Original-Eckpunkte (unverändert seit Konstruktion).
    pub fn original_vertices(&self) -> &[Vec2] {
        &self.original_vertices
    }

    /// Schwerpunkt der Original-Eckpunkte.
    pub fn original_centroid(&self) -> Vec2 {
        self.original_centroid
    }

    /// Anzahl Eckpunkte.
    pub fn vertex_count(&self) -> usize {
        self.original_vertices.len()
    }

    /// Akkumulierte Translation relativ zum Original-Schwerpunkt.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Akkumulierte Rotation in Grad, immer in (-360, 360].
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// `true`, wenn sich die Transformation seit der letzten Ableitung geändert hat.
    pub fn is_dirty(&self) -> bool {
        self.world.get().is_none()
    }

    /// Verschiebt die Form so, dass ihr Schwerpunkt auf `target` liegt.
    ///
    /// Die Translation bezieht sich immer auf den Original-Schwerpunkt,
    /// wiederholte Aufrufe sind daher nicht kumulativ.
    pub fn move_to(&mut self, target: Vec2) {
        self.translation = target - self.original_centroid;
        self.invalidate();
    }

    /// Dreht die Form um `delta_degrees` um ihren eigenen Schwerpunkt.
    ///
    /// Nicht-endliche Deltas werden ignoriert.
    pub fn rotate(&mut self, delta_degrees: f32) {
        if !delta_degrees.is_finite() {
            return;
        }
        self.rotation_degrees = normalize_degrees(self.rotation_degrees + delta_degrees);
        self.invalidate();
    }

    /// Welt-Schwerpunkt (gerundet).
    pub fn world_centroid(&self) -> Vec2 {
        self.world().centroid
    }

    /// Welt-Eckpunkte (gedreht, verschoben, gerundet).
    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world().vertices
    }

    /// Snap-Punkte: alle Welt-Eckpunkte, danach der Mittelpunkt jeder Kante
    /// `(i, (i + 1) mod n)`. Liefert immer genau `2n` Punkte.
    pub fn snap_points(&self) -> &[Vec2] {
        &self.world().snap_points
    }

    /// Ray-Casting-Test, ob `point` im Polygon liegt.
    ///
    /// Halboffene Kanten-Konvention: Eine Kante zählt, wenn sie die Höhe von
    /// `point` echt überspannt (`a.y > p.y != b.y > p.y`) und der Schnittpunkt
    /// echt rechts von `point` liegt. Linke/obere Ränder liegen damit innen,
    /// rechte/untere außen. Für entartete Polygone ist das Ergebnis undefiniert.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let vertices = self.world_vertices();
        let mut inside = false;
        let mut previous = vertices[vertices.len() - 1];

        for &current in vertices {
            if (current.y > point.y) != (previous.y > point.y) {
                let x_cross = (previous.x - current.x) * (point.y - current.y)
                    / (previous.y - current.y)
                    + current.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            previous = current;
        }

        inside
    }

    /// Füllfarbe (None = nur Umriss).
    pub fn fill_color(&self) -> Option<[f32; 4]> {
        self.fill_color
    }

    /// Setzt oder entfernt die Füllfarbe.
    pub fn set_fill_color(&mut self, color: Option<[f32; 4]>) {
        self.fill_color = color;
    }

    /// Gibt zurück, ob die Form gefüllt dargestellt wird.
    pub fn is_filled(&self) -> bool {
        self.fill_color.is_some()
    }

    /// Gibt die Form über `target` aus: zuerst die Füllung als Fächer-Triangulierung
    /// ab Eckpunkt 0, danach den Umriss.
    ///
    /// Die Linienstärke entsteht aus `thickness` parallelen Linien, entlang der
    /// Kanten-Normale um ganzzahlige Schritte von `-thickness/2` an versetzt,
    /// höchstens [`MAX_OUTLINE_LINES`] pro Kante.
    pub fn draw(&self, target: &mut impl DrawTarget, outline_color: [f32; 4], thickness: u32) {
        let vertices = self.world_vertices();

        if let Some(fill) = self.fill_color {
            let anchor = vertices[0];
            for pair in vertices[1..].windows(2) {
                target.fill_triangle(anchor, pair[0], pair[1], fill);
            }
        }

        let lines = thickness.clamp(1, MAX_OUTLINE_LINES) as i32;
        let half = lines / 2;
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let normal = (b - a).perp().normalize_or_zero();
            for step in -half..(lines - half) {
                let offset = normal * step as f32;
                target.draw_line(a + offset, b + offset, outline_color, 1.0);
            }
        }
    }

    fn invalidate(&mut self) {
        self.world.take();
    }

    fn world(&self) -> &WorldGeometry {
        self.world.get_or_init(|| self.derive_world())
    }

    /// Leitet die Welt-Geometrie frisch aus Original-Eckpunkten und Gesamt-Transformation ab.
    fn derive_world(&self) -> WorldGeometry {
        let vertices: Vec<Vec2> = self
            .original_vertices
            .iter()
            .map(|&v| {
                round_world(
                    rotate_about(v, self.original_centroid, self.rotation_degrees)
                        + self.translation,
                )
            })
            .collect();

        let n = vertices.len();
        let mut snap_points = Vec::with_capacity(2 * n);
        snap_points.extend_from_slice(&vertices);
        snap_points.extend((0..n).map(|i| midpoint(vertices[i], vertices[(i + 1) % n])));

        WorldGeometry {
            centroid: round_world(self.original_centroid + self.translation),
            vertices,
            snap_points,
        }
    }
}
