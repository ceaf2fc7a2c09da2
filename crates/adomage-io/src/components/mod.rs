//! Dioxus UI components for adomage.
//!
//! Provides the upload controller, the canvas stage that previews the
//! selected image, the editor page hosting it, and the light/dark mode
//! toggle.

mod canvas_stage;
mod editor_page;
mod mode_toggle;
mod upload;

pub use canvas_stage::CanvasStage;
pub use editor_page::EditorPage;
pub use mode_toggle::ModeToggle;
pub use upload::{UploadController, UploadVariant};
