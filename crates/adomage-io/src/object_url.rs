//! Blob URLs backing image previews.
//!
//! Wraps a selected file's bytes in a typed `Blob` and hands the
//! browser's object URL to the canvas stage. Every URL created here
//! stays resolvable until revoked, so ownership of the returned string
//! is taken over by [`adomage_preview::PreviewHandle`].
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use adomage_preview::{ObjectUrlRegistry, PreviewError, SelectedFile};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur during Blob URL creation.
#[derive(Debug, thiserror::Error)]
pub enum BlobUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<BlobUrlError> for PreviewError {
    fn from(err: BlobUrlError) -> Self {
        Self::Runtime(err.to_string())
    }
}

/// Create an object URL for `bytes` typed as `mime_type`.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`BlobUrlError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobUrlError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: failures are logged and otherwise ignored, since there
/// is nothing the caller could do about them.
pub fn revoke_blob_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::warn!(%url, error = ?e, "failed to revoke blob URL");
    }
}

/// [`ObjectUrlRegistry`] backed by the browser's `URL` API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserObjectUrls;

impl ObjectUrlRegistry for BrowserObjectUrls {
    fn create(&self, file: &SelectedFile) -> Result<String, PreviewError> {
        Ok(bytes_to_blob_url(file.bytes(), file.mime())?)
    }

    fn revoke(&self, url: &str) {
        revoke_blob_url(url);
    }
}
