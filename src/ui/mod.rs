//! UI-Host: Eingabe-Sammlung, Zeichnen der Render-Szene, Status-Bar.

pub mod input;
mod keyboard;
/// Zeichnet `RenderScene`-Befehle mit dem egui-Painter
pub mod painter;
pub mod status;

pub use input::{InputState, ViewportInput};
pub use painter::paint_scene;
pub use status::render_status_bar;
