use adomage_io::{EditorPage, ModeToggle, theme};
use adomage_preview::StageLayout;
use dioxus::prelude::*;

/// Stage layout shipped with the app; edit `assets/stage.json` to resize
/// the canvas without touching code.
const STAGE_LAYOUT_JSON: &str = include_str!("../assets/stage.json");

fn main() {
    // Fails only if a subscriber is already installed, which is fine.
    let _ = dioxus::logger::init(tracing::Level::INFO);
    dioxus::launch(app);
}

/// Root page shell.
///
/// Provides the stage layout and the theme signal to descendants, then
/// composes the mode toggle and the editor.
fn app() -> Element {
    use_context_provider(load_layout);
    use_context_provider(|| Signal::new(theme::initial_theme()));

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "page",
            ModeToggle {}
            EditorPage {}
        }
    }
}

/// Parse the embedded stage layout, falling back to the defaults.
fn load_layout() -> StageLayout {
    StageLayout::from_json(STAGE_LAYOUT_JSON).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid embedded stage layout, using defaults");
        StageLayout::default()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layout_is_valid() {
        let layout = StageLayout::from_json(STAGE_LAYOUT_JSON).unwrap();
        assert_eq!(load_layout(), layout);
    }

    #[test]
    fn embedded_layout_matches_defaults() {
        // The shipped file documents the defaults; keep them in sync.
        assert_eq!(load_layout(), StageLayout::default());
    }
}
