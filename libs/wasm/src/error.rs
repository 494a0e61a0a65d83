//! Errors raised at the JavaScript boundary.

use coplanar_outline::OutlineError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a boundary call. Thrown to JavaScript as an `Error`.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Malformed packed buffer or descriptor.
    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// The polygon hierarchy JSON could not be parsed.
    #[error("invalid polygon hierarchy JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<BoundaryError> for JsValue {
    fn from(error: BoundaryError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
