//! Application Controller für zentrale Event-Verarbeitung.

use glam::Vec2;

use super::render_scene;
use super::state::EditorTool;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen kompletten Frame.
    ///
    /// Reihenfolge: Frame-Eingaben übernehmen und Rotations-Timer
    /// fortschreiben, Intents ausführen, aktive Form der Maus folgen lassen,
    /// Snap- bzw. Hover-Zustand neu berechnen, Render-Szene bauen.
    pub fn update(
        &mut self,
        state: &mut AppState,
        elapsed_secs: f32,
        mouse_world: Vec2,
        intents: Vec<AppIntent>,
    ) -> anyhow::Result<RenderScene> {
        state.frame.elapsed_secs = elapsed_secs.max(0.0);
        state.frame.mouse_world = mouse_world;
        state.editor.time_since_last_rotation += state.frame.elapsed_secs;

        for intent in intents {
            self.handle_intent(state, intent)?;
        }

        match state.editor.active_tool {
            EditorTool::Place => {
                use_cases::placement::follow_mouse(state, mouse_world);
                use_cases::placement::refresh_snap(state);
                state.hovered_shape = None;
            }
            EditorTool::Fill => {
                state.snap = Default::default();
                use_cases::fill::refresh_hover(state);
            }
        }

        Ok(self.build_render_scene(state))
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Platzieren ===
            AppCommand::RotateActiveShape { delta_degrees } => {
                handlers::placement::rotate_active(state, delta_degrees)
            }
            AppCommand::ResetRotationTimer => handlers::placement::reset_rotation_timer(state),
            AppCommand::SetShapeKind { kind } => {
                handlers::placement::set_shape_kind(state, kind)?
            }
            AppCommand::CommitActiveShape { world_pos } => {
                handlers::placement::commit(state, world_pos)?
            }

            // === Werkzeug & Verlauf ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::UndoLastPlacement => handlers::history::undo(state),

            // === Füllen ===
            AppCommand::FillShapeAt { world_pos } => handlers::fill::fill_at(state, world_pos),
            AppCommand::ClearFillAt { world_pos } => {
                handlers::fill::clear_fill_at(state, world_pos)
            }
            AppCommand::SetFillColorIndex { index } => {
                handlers::fill::set_fill_color_index(state, index)
            }

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
        }

        Ok(())
    }

    /// Baut die RenderScene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
