//! adomage-preview: Canvas stage state for the adomage editor (sans-IO).
//!
//! Models the single-image preview slot of the editor's canvas stage:
//! a user-selected file is turned into a revocable preview handle
//! (an object URL in the browser), swapped on re-selection, and
//! released on teardown.
//!
//! This crate has **no browser dependencies** -- the runtime that mints
//! and revokes handles is abstracted behind [`ObjectUrlRegistry`]. The
//! `web-sys` implementation and the Dioxus components live in
//! `adomage-io`.

pub mod file;
pub mod handle;
pub mod layout;
pub mod slot;
pub mod theme;
pub mod view;

pub use file::{FileError, SelectedFile};
pub use handle::{ObjectUrlRegistry, PreviewError, PreviewHandle};
pub use layout::{LayoutError, StageLayout};
pub use slot::{PreviewSlot, PreviewState};
pub use theme::Theme;
pub use view::StageView;
