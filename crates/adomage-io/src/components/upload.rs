//! Upload controller: drag-and-drop zone with a file picker.

use adomage_preview::SelectedFile;
use adomage_preview::file::{ACCEPT_ATTRIBUTE, has_allowed_extension};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Presentation style of the [`UploadController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadVariant {
    /// Large bordered card with an icon, filling its region.
    #[default]
    Card,
    /// Compact single-row prompt.
    Inline,
}

impl UploadVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Card => "upload upload-card",
            Self::Inline => "upload upload-inline",
        }
    }
}

/// Props for the [`UploadController`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadControllerProps {
    /// Called once per valid selection with the validated file.
    on_select: EventHandler<SelectedFile>,
    /// Presentation style.
    #[props(default)]
    variant: UploadVariant,
    /// Fixed height of the drop zone, if any.
    height_px: Option<u32>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts PNG, JPEG, BMP, WebP, and GIF images. Only the first file of
/// a selection is used. Invalid or unreadable files are reported inline
/// and never reach `on_select`.
#[component]
pub fn UploadController(props: UploadControllerProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let on_select = props.on_select;

    // Shared by the file-picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if !has_allowed_extension(&name) {
            error.set(Some(format!("Unsupported file type: {name}")));
            return;
        }
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!(%name, error = %e, "failed to read selected file");
                error.set(Some(format!("Failed to read file: {e}")));
                return;
            }
        };
        match SelectedFile::new(name, bytes) {
            Ok(selected) => {
                error.set(None);
                on_select.call(selected);
            }
            Err(e) => error.set(Some(format!("{e}"))),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let variant_class = props.variant.class();
    let drag_class = if dragging() { "upload-dragging" } else { "" };
    let height_style = props
        .height_px
        .map_or_else(String::new, |h| format!("height: {h}px;"));

    rsx! {
        div {
            class: "{variant_class} {drag_class}",
            style: "{height_style}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if props.variant == UploadVariant::Card {
                Icon { class: "upload-icon", width: 40, height: 40, icon: LdUpload }
            }

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            p { class: "upload-hint", "Drop an image here or " }

            label { class: "btn-primary",
                input {
                    r#type: "file",
                    accept: ACCEPT_ATTRIBUTE,
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "upload-formats", "PNG, JPEG, BMP, WebP, GIF" }
        }
    }
}
