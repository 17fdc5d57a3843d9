//! Tessellation Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, SceneState,
    ViewState,
};
pub use core::{
    Camera2D, DrawCommand, DrawList, DrawTarget, Shape, ShapeError, ShapeKind, SnapPair, SnapState,
};
pub use shared::{EditorOptions, RenderScene};
