use glam::Vec2;

use crate::core::{Shape, ShapeKind};

/// Platzierte Formen und die aktive (noch nicht platzierte) Form.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Platzierte Formen in Platzierungsreihenfolge (letzte = oberste)
    placed: Vec<Shape>,
    /// Form, die der Maus folgt
    active: Shape,
}

impl SceneState {
    /// Erstellt eine leere Szene mit einer aktiven Form an `anchor`.
    pub fn new(kind: ShapeKind, anchor: Vec2, side_length: f32) -> Self {
        Self {
            placed: Vec::new(),
            active: kind.create(anchor, side_length),
        }
    }

    /// Read-only Sicht auf alle platzierten Formen.
    pub fn placed(&self) -> &[Shape] {
        &self.placed
    }

    /// Anzahl platzierter Formen.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Mutable Zugriff auf eine platzierte Form.
    pub fn placed_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.placed.get_mut(index)
    }

    /// Die aktive Form.
    pub fn active(&self) -> &Shape {
        &self.active
    }

    /// Mutable Zugriff auf die aktive Form.
    pub fn active_mut(&mut self) -> &mut Shape {
        &mut self.active
    }

    /// Ersetzt die aktive Form.
    pub fn replace_active(&mut self, shape: Shape) {
        self.active = shape;
    }

    /// Platziert die aktive Form und setzt `next` als neue aktive Form.
    ///
    /// Gibt den Index der platzierten Form zurück.
    pub fn commit_active(&mut self, next: Shape) -> usize {
        let committed = std::mem::replace(&mut self.active, next);
        self.placed.push(committed);
        self.placed.len() - 1
    }

    /// Entfernt die zuletzt platzierte Form (None wenn keine vorhanden).
    pub fn undo_last(&mut self) -> Option<Shape> {
        self.placed.pop()
    }

    /// Index der obersten (zuletzt platzierten) Form, die `point` enthält.
    pub fn topmost_containing(&self, point: Vec2) -> Option<usize> {
        self.placed
            .iter()
            .rposition(|shape| shape.contains_point(point))
    }
}
