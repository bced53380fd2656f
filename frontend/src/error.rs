use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser glue layer. None of these are fatal: callers log
/// them and fall back to a static rendering.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("please enter your email")]
    EmptyEmail,
    #[error("could not deliver message: {0}")]
    Delivery(String),
}
