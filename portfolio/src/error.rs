//! Error type for the few browser calls that can fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while mounting or listening to the page.
#[derive(Debug, Error)]
pub enum PageError {
    /// Mount attempted outside a browser (no `window` object).
    #[error("no browser window available")]
    NoWindow,
    /// A JS exception surfaced through `wasm-bindgen`.
    #[error("javascript error: {0}")]
    Js(String),
    /// The console logger was installed twice.
    #[error("console logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
