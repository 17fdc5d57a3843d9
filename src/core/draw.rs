//! Zeichen-Primitive als Schnittstelle zum externen Renderer.
//!
//! Der Core rasterisiert nichts selbst. Formen geben ihre Geometrie über
//! `DrawTarget` aus; `DrawList` zeichnet die Aufrufe als `DrawCommand`s auf,
//! die der Host pro Frame abarbeitet.

use glam::Vec2;

/// Ein einzelner Zeichenbefehl in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Linie von `from` nach `to` (Stärke in Screen-Pixeln)
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 4],
        thickness: f32,
    },
    /// Gefülltes Dreieck
    FillTriangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: [f32; 4],
    },
    /// Gefüllter Kreis (Radius in Welteinheiten)
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Ziel für Zeichenaufrufe (Renderer-Kollaborator).
pub trait DrawTarget {
    /// Zeichnet eine Linie.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], thickness: f32);
    /// Füllt ein Dreieck.
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]);
    /// Füllt einen Kreis.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Aufzeichnende `DrawTarget`-Implementierung.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Read-only Sicht auf alle aufgezeichneten Befehle.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Anzahl aufgezeichneter Befehle.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true`, wenn nichts aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Gibt die aufgezeichneten Befehle heraus.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawTarget for DrawList {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], thickness: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.commands
            .push(DrawCommand::FillTriangle { a, b, c, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
