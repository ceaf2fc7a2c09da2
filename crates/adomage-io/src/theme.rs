//! Light/dark theme persistence and application.
//!
//! The active theme is mirrored onto the `data-theme` attribute of the
//! document element (which the stylesheet keys its CSS variables on) and
//! stored in `localStorage` so a reload keeps the user's choice.

use adomage_preview::Theme;
use wasm_bindgen::JsValue;

/// `localStorage` key holding the stored [`Theme`].
pub const STORAGE_KEY: &str = "adomage-theme";

/// Errors that can occur when reading or applying the theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A browser API call returned an error or a required object was missing.
    #[error("theme API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Determine the theme to start with.
///
/// Uses the stored preference if there is a valid one, otherwise the
/// operating system's `prefers-color-scheme`, otherwise [`Theme::Light`].
#[must_use]
pub fn initial_theme() -> Theme {
    match stored_theme() {
        Ok(Some(theme)) => return theme,
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "could not read stored theme"),
    }
    match prefers_dark() {
        Ok(true) => Theme::Dark,
        Ok(false) => Theme::Light,
        Err(e) => {
            tracing::warn!(error = %e, "could not query prefers-color-scheme");
            Theme::default()
        }
    }
}

/// Set `data-theme` on the document element and store the preference.
///
/// # Errors
///
/// Returns [`ThemeError::JsError`] if the window, document, or storage is
/// unavailable, or if setting the attribute or storage item fails.
pub fn apply_theme(theme: Theme) -> Result<(), ThemeError> {
    let window = window()?;
    let el = window
        .document()
        .ok_or_else(|| ThemeError::JsError("no document".into()))?
        .document_element()
        .ok_or_else(|| ThemeError::JsError("no document element".into()))?;
    el.set_attribute("data-theme", theme.as_attr())?;

    let storage = window
        .local_storage()?
        .ok_or_else(|| ThemeError::JsError("no localStorage".into()))?;
    storage.set_item(STORAGE_KEY, theme.as_attr())?;
    Ok(())
}

/// Read the stored preference, ignoring unrecognized values.
fn stored_theme() -> Result<Option<Theme>, ThemeError> {
    let Some(storage) = window()?.local_storage()? else {
        return Ok(None);
    };
    Ok(storage
        .get_item(STORAGE_KEY)?
        .as_deref()
        .and_then(Theme::from_attr))
}

fn prefers_dark() -> Result<bool, ThemeError> {
    Ok(window()?
        .match_media("(prefers-color-scheme: dark)")?
        .is_some_and(|query| query.matches()))
}

fn window() -> Result<web_sys::Window, ThemeError> {
    web_sys::window().ok_or_else(|| ThemeError::JsError("no global window".into()))
}
