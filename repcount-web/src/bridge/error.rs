//! Bridge errors and their conversion to JS exceptions

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::ConfigError;
use crate::geometry::{LANDMARK_COUNT, LANDMARK_STRIDE};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("invalid landmark data length: {0} (expected 0 or {expected})", expected = LANDMARK_COUNT * LANDMARK_STRIDE)]
    LandmarkLength(usize),

    #[error("invalid frame size {width}x{height}")]
    FrameSize { width: u32, height: u32 },

    #[error("no session configured, call configureSession first")]
    NotConfigured,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
