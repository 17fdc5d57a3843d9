//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod frame;
mod scene;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use frame::FrameState;
pub use scene::SceneState;
pub use view::ViewState;
