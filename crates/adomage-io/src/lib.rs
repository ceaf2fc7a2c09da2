//! adomage-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob URL creation for image previews, theme persistence,
//! and provides the UI components of the adomage editor.

pub mod components;
pub mod object_url;
pub mod theme;

pub use components::{CanvasStage, EditorPage, ModeToggle, UploadController, UploadVariant};
pub use object_url::BrowserObjectUrls;
