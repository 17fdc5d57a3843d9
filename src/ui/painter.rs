//! Zeichnet eine `RenderScene` mit dem egui-Painter in den Viewport.

use eframe::egui;
use glam::Vec2;

use crate::core::{Camera2D, DrawCommand, DrawTarget};
use crate::shared::RenderScene;

/// `DrawTarget`, das Weltkoordinaten über die Kamera auf den egui-Painter abbildet.
struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    camera: Camera2D,
    viewport_size: Vec2,
}

impl EguiCanvas<'_> {
    fn to_screen(&self, world: Vec2) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport_size);
        self.origin + egui::vec2(local.x, local.y)
    }
}

impl DrawTarget for EguiCanvas<'_> {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4], thickness: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(thickness, to_color32(color)),
        );
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.painter.add(egui::Shape::convex_polygon(
            vec![self.to_screen(a), self.to_screen(b), self.to_screen(c)],
            to_color32(color),
            egui::Stroke::NONE,
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter.circle_filled(
            self.to_screen(center),
            radius * self.camera.zoom,
            to_color32(color),
        );
    }
}

/// Füllt `rect` mit der Hintergrundfarbe und arbeitet alle Zeichenbefehle der Szene ab.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background_color));

    let mut canvas = EguiCanvas {
        painter,
        origin: rect.min,
        camera: scene.camera,
        viewport_size: Vec2::new(scene.viewport_size[0], scene.viewport_size[1]),
    };

    for command in &scene.commands {
        match *command {
            DrawCommand::Line {
                from,
                to,
                color,
                thickness,
            } => canvas.draw_line(from, to, color, thickness),
            DrawCommand::FillTriangle { a, b, c, color } => canvas.fill_triangle(a, b, c, color),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => canvas.fill_circle(center, radius, color),
        }
    }
}

/// Wandelt eine RGBA-Farbe (0..=1) in eine egui-Farbe um.
fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
