//! Light/dark mode toggle button.

use adomage_preview::Theme;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};

use crate::theme;

/// Flips the [`Theme`] provided in context by the app root.
///
/// Mirrors every change onto the document and into `localStorage`;
/// failures there are logged and do not affect the in-app theme.
#[component]
pub fn ModeToggle() -> Element {
    let mut current: Signal<Theme> = use_context();

    use_effect(move || {
        let theme = current();
        if let Err(e) = theme::apply_theme(theme) {
            tracing::warn!(%theme, error = %e, "could not apply theme");
        }
    });

    let label = current().toggle_label();
    let icon = match current() {
        Theme::Light => rsx! { Icon { width: 18, height: 18, icon: LdMoon } },
        Theme::Dark => rsx! { Icon { width: 18, height: 18, icon: LdSun } },
    };

    rsx! {
        button {
            class: "mode-toggle",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| {
                let next = current().toggled();
                current.set(next);
            },
            {icon}
        }
    }
}
