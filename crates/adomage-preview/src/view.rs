//! What the canvas stage should display.

/// Render model of the canvas stage, derived from its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageView {
    /// No preview is active: show the upload prompt.
    UploadPrompt {
        /// Fixed height of the prompt region.
        height_px: u32,
    },
    /// A preview is active: show the image bound to its handle.
    Image {
        /// The active handle's URL.
        src: String,
        /// Alternative text.
        alt: String,
        /// Upper bound on the rendered height; width follows the
        /// aspect ratio.
        max_height_px: u32,
        /// Whether the browser may start a drag from the image.
        draggable: bool,
    },
}

impl StageView {
    /// `true` when the upload prompt is shown.
    #[must_use]
    pub const fn is_prompt(&self) -> bool {
        matches!(self, Self::UploadPrompt { .. })
    }

    /// The bound image URL, if an image is shown.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        match self {
            Self::UploadPrompt { .. } => None,
            Self::Image { src, .. } => Some(src),
        }
    }
}
