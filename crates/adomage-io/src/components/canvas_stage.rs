//! Canvas stage: upload prompt or the selected image.
//!
//! Owns the stage's [`PreviewSlot`]. Selecting a file creates a Blob URL
//! for it and releases the previous one in the same event handler;
//! unmounting the stage releases whatever is still shown.

use adomage_preview::{PreviewSlot, SelectedFile, StageLayout, StageView};
use dioxus::prelude::*;

use super::upload::{UploadController, UploadVariant};
use crate::object_url::BrowserObjectUrls;

/// The editor's single-image canvas.
///
/// Reads its [`StageLayout`] from context, falling back to the default
/// layout when none is provided.
#[component]
pub fn CanvasStage() -> Element {
    let layout = try_use_context::<StageLayout>().unwrap_or_default();
    let mut slot = use_signal(|| PreviewSlot::new(BrowserObjectUrls));
    let mut error = use_signal(|| Option::<String>::None);

    {
        let mut slot = slot;
        use_drop(move || {
            // If the signal is already gone its value was dropped, which
            // released the handle.
            if let Ok(mut slot) = slot.try_write() {
                slot.teardown();
            }
        });
    }

    let on_select = move |file: SelectedFile| match slot.write().select(&file) {
        Ok(()) => error.set(None),
        Err(e) => {
            tracing::warn!(name = file.name(), error = %e, "could not preview image");
            error.set(Some(format!("{e}")));
        }
    };

    let body = match slot.read().view(&layout) {
        StageView::UploadPrompt { height_px } => rsx! {
            UploadController {
                variant: UploadVariant::Card,
                on_select: on_select,
                height_px: height_px,
            }
        },
        StageView::Image {
            src,
            alt,
            max_height_px,
            draggable,
        } => rsx! {
            div { class: "stage-image-wrap",
                img {
                    class: "stage-image",
                    src: "{src}",
                    alt: "{alt}",
                    draggable: "{draggable}",
                    style: "max-height: {max_height_px}px;",
                }
            }
        },
    };

    let max_width = layout.max_width_px;
    let min_height = layout.min_height_px;

    rsx! {
        div { class: "stage",
            div {
                class: "stage-frame",
                style: "max-width: {max_width}px; min-height: {min_height}px;",
                {body}
            }
            if let Some(ref err) = error() {
                p { class: "stage-error", "{err}" }
            }
        }
    }
}
