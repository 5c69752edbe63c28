//! Error type shared by the browser shell and the persistence adapters.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("dom: {0}")]
    Dom(String),
    #[error("storage: {0}")]
    Storage(String),
    #[error("config: {0}")]
    Config(String),
}

impl GameError {
    /// Wrap a thrown JS value from a DOM call.
    pub fn dom(err: JsValue) -> Self {
        GameError::Dom(describe(&err))
    }

    pub fn storage(err: JsValue) -> Self {
        GameError::Storage(describe(&err))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
