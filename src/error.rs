use wasm_bindgen::JsValue;

/// Failures at the DOM boundary. These are logged, never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    #[error("no window object available")]
    NoWindow,

    #[error("canvas element is not mounted")]
    NoCanvas,

    #[error("canvas has no 2d rendering context")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ViewportError {
    fn from(value: JsValue) -> Self {
        ViewportError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
