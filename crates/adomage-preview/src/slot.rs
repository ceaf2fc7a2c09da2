//! The canvas stage's single preview slot.
//!
//! ```text
//!   Empty ──select──▶ Previewing(h) ──select──▶ Previewing(h')   (h released)
//!     │                     │
//!  teardown              teardown (h released)
//!     ▼                     ▼
//!   TornDown ◀──────────────┘
//! ```
//!
//! There is no transition back to `Empty`: a preview is only ever
//! replaced by another selection or released by teardown.

use crate::file::SelectedFile;
use crate::handle::{ObjectUrlRegistry, PreviewError, PreviewHandle};
use crate::layout::StageLayout;
use crate::view::StageView;

/// State of a [`PreviewSlot`].
#[derive(Debug)]
pub enum PreviewState<R: ObjectUrlRegistry> {
    /// Nothing selected yet.
    Empty,
    /// Showing the image behind the held handle.
    Previewing(PreviewHandle<R>),
    /// Terminal: the owning stage is gone.
    TornDown,
}

/// Holds at most one active preview handle for a canvas stage.
///
/// Handles are released by dropping them, and the slot is their only
/// owner, so each handle is released exactly once: on replacement,
/// on [`teardown`](Self::teardown), or when the slot itself is dropped.
#[derive(Debug)]
pub struct PreviewSlot<R: ObjectUrlRegistry> {
    registry: R,
    state: PreviewState<R>,
}

impl<R: ObjectUrlRegistry> PreviewSlot<R> {
    /// Create an empty slot backed by `registry`.
    #[must_use]
    pub const fn new(registry: R) -> Self {
        Self {
            registry,
            state: PreviewState::Empty,
        }
    }

    /// Show `file`, replacing any current preview.
    ///
    /// The new handle is created before the previous one is released,
    /// and both happen within this call.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::TornDown`] after [`teardown`](Self::teardown).
    /// Returns [`PreviewError::Runtime`] if the registry cannot create a
    /// handle; the current preview, if any, stays active.
    pub fn select(&mut self, file: &SelectedFile) -> Result<(), PreviewError> {
        if matches!(self.state, PreviewState::TornDown) {
            return Err(PreviewError::TornDown);
        }
        let handle = PreviewHandle::acquire(self.registry.clone(), file)?;
        let previous = std::mem::replace(&mut self.state, PreviewState::Previewing(handle));
        tracing::info!(
            name = file.name(),
            mime = file.mime(),
            bytes = file.len(),
            replaced = matches!(previous, PreviewState::Previewing(_)),
            "image selected"
        );
        drop(previous);
        Ok(())
    }

    /// Release the current preview, if any, and refuse further selections.
    ///
    /// Calling this more than once is a no-op.
    pub fn teardown(&mut self) {
        let previous = std::mem::replace(&mut self.state, PreviewState::TornDown);
        if matches!(previous, PreviewState::Previewing(_)) {
            tracing::debug!("releasing preview on teardown");
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &PreviewState<R> {
        &self.state
    }

    /// The active handle, if a preview is shown.
    #[must_use]
    pub const fn current(&self) -> Option<&PreviewHandle<R>> {
        match &self.state {
            PreviewState::Previewing(handle) => Some(handle),
            PreviewState::Empty | PreviewState::TornDown => None,
        }
    }

    /// `true` while a preview is shown.
    #[must_use]
    pub const fn is_previewing(&self) -> bool {
        self.current().is_some()
    }

    /// `true` once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        matches!(self.state, PreviewState::TornDown)
    }

    /// What the stage should render for the current state.
    #[must_use]
    pub fn view(&self, layout: &StageLayout) -> StageView {
        match self.current() {
            Some(handle) => StageView::Image {
                src: handle.url().to_owned(),
                alt: layout.image_alt.clone(),
                max_height_px: layout.image_max_height_px,
                draggable: false,
            },
            None => StageView::UploadPrompt {
                height_px: layout.prompt_height_px,
            },
        }
    }
}
