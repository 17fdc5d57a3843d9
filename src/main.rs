//! Tessellation Editor.
//!
//! Interaktives Platzieren, Drehen, Einrasten und Einfärben von Polygonen
//! auf einer verschieb- und zoombaren Zeichenfläche (egui + glow).

use eframe::egui;
use tessellation_editor::{ui, AppController, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Tessellation Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Tessellation Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Tessellation Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        // Beim ersten Start eine editierbare Vorlage mit den Standardwerten anlegen
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Vorlage konnte nicht geschrieben werden: {:#}", e);
            }
        }

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, &self.state);

        let elapsed_secs = ctx.input(|i| i.stable_dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                let input = self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                );

                match self.controller.update(
                    &mut self.state,
                    elapsed_secs,
                    input.mouse_world,
                    input.intents,
                ) {
                    Ok(scene) => ui::paint_scene(ui.painter(), rect, &scene),
                    Err(e) => log::error!("Frame-Verarbeitung fehlgeschlagen: {:#}", e),
                }
            });

        // Gehaltene Tasten und Maus-Folgen brauchen kontinuierliche Frames
        ctx.request_repaint();
    }
}
