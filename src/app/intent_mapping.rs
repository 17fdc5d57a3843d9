//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::CycleDirection;
use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let placing = state.editor.active_tool == EditorTool::Place;

    match intent {
        AppIntent::RotateHeld { direction } => {
            if !placing
                || state.editor.time_since_last_rotation < state.options.rotation_interval_secs
            {
                return Vec::new();
            }
            vec![
                AppCommand::RotateActiveShape {
                    delta_degrees: direction.sign() * state.options.rotation_step_degrees,
                },
                AppCommand::ResetRotationTimer,
            ]
        }
        AppIntent::RotateStep { direction } if placing => vec![AppCommand::RotateActiveShape {
            delta_degrees: direction.sign() * state.options.rotation_step_degrees,
        }],
        AppIntent::CycleShapeKindRequested if placing => vec![AppCommand::SetShapeKind {
            kind: state.editor.shape_kind.next(),
        }],
        AppIntent::CycleToolRequested => vec![AppCommand::SetEditorTool {
            tool: state.editor.active_tool.next(),
        }],
        AppIntent::UndoRequested => vec![AppCommand::UndoLastPlacement],
        AppIntent::PrimaryClick => {
            let world_pos = state.frame.mouse_world;
            match state.editor.active_tool {
                EditorTool::Place => vec![AppCommand::CommitActiveShape { world_pos }],
                EditorTool::Fill => vec![AppCommand::FillShapeAt { world_pos }],
            }
        }
        AppIntent::ClearFillRequested if !placing => vec![AppCommand::ClearFillAt {
            world_pos: state.frame.mouse_world,
        }],
        AppIntent::PanHeld { direction } => {
            let distance = state.options.camera_pan_speed * state.frame.elapsed_secs;
            vec![AppCommand::PanCamera {
                delta: direction.unit() * distance,
            }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.camera_zoom_in_factor,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.camera_zoom_out_factor,
        }],
        AppIntent::CycleFillColor { direction } => {
            let len = state.options.fill_palette.len();
            if len == 0 {
                return Vec::new();
            }
            let current = state.editor.fill_color_index % len;
            let index = match direction {
                CycleDirection::Next => (current + 1) % len,
                CycleDirection::Previous => (current + len - 1) % len,
            };
            vec![AppCommand::SetFillColorIndex { index }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::RotateStep { .. }
        | AppIntent::CycleShapeKindRequested
        | AppIntent::ClearFillRequested => Vec::new(),
    }
}
