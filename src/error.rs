//! Error types for creating and registering traps.

use web_sys::{js_sys, wasm_bindgen::JsValue};

/// Result type alias for trap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a trap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no `window` (for example inside a worker).
    #[error("No global window available")]
    NoWindow,

    /// The tag name is not a valid custom element name.
    #[error("Invalid custom element name '{0}'")]
    InvalidTagName(String),

    /// `attachShadow` was rejected, usually because the host already has a shadow root.
    #[error("Failed to attach shadow root: {0}")]
    AttachShadow(String),

    /// `createElement` failed while building the shadow subtree.
    #[error("Failed to create <{tag_name}>: {message}")]
    CreateElement { tag_name: String, message: String },

    /// `customElements.define` threw.
    #[error("Failed to define <{tag_name}>: {message}")]
    Define { tag_name: String, message: String },

    /// A props or options object could not be read.
    #[error("Invalid props: {0}")]
    Props(#[from] serde_wasm_bindgen::Error),
}

impl Error {
    pub fn create_element(tag_name: impl Into<String>, err: JsValue) -> Self {
        Self::CreateElement {
            tag_name: tag_name.into(),
            message: js_message(&err),
        }
    }

    pub fn define(tag_name: impl Into<String>, err: JsValue) -> Self {
        Self::Define {
            tag_name: tag_name.into(),
            message: js_message(&err),
        }
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = web_sys::wasm_bindgen::JsCast::dyn_ref::<js_sys::Error>(value) {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
