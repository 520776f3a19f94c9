//! Error types
//!
//! Gameplay itself never fails: blocked moves and off-screen paddles are
//! ignored or clamped. Errors only come from setup (page lookups, config).

use thiserror::Error;

/// Result alias used by setup code
pub type ArcadeResult<T> = Result<T, ArcadeError>;

#[derive(Debug, Error)]
pub enum ArcadeError {
    /// No global `window` (not running in a browser page)
    #[error("no window available")]
    NoWindow,

    /// Window without a document
    #[error("no document available")]
    NoDocument,

    /// Element lookup by id failed
    #[error("element #{id} not found")]
    MissingElement { id: String },

    /// Element exists but is not a `<canvas>`
    #[error("element #{id} is not a canvas")]
    NotACanvas { id: String },

    /// Canvas refused to hand out a 2D context
    #[error("canvas #{id} has no 2d context")]
    NoContext2d { id: String },

    /// A browser API call threw
    #[error("javascript error: {0}")]
    Js(String),

    /// Config JSON did not parse
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Requested maze level does not exist
    #[error("unknown level {index} ({available} available)")]
    UnknownLevel { index: usize, available: usize },
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ArcadeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ArcadeError::Js(format!("{:?}", value))
    }
}
