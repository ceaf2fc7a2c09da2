//! Editor entry point.

use dioxus::prelude::*;

use super::canvas_stage::CanvasStage;

/// The editor view hosting the canvas stage.
#[component]
pub fn EditorPage() -> Element {
    rsx! {
        main { class: "editor",
            CanvasStage {}
        }
    }
}
