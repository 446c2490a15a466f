//! Session storage and per-frame JS entry points
//!
//! JS owns the camera and the pose model; once per video frame it hands
//! the landmarks here and gets back draw commands plus the classification.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::classifier::{ClassificationResult, ExerciseClassifier};
use crate::config::{SessionConfig, ThresholdProfile};
use crate::overlay::DrawCommand;

use super::error::BridgeError;
use super::landmarks::{decode_frame_size, decode_landmarks};

/// Everything JS needs to render one frame
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub result: ClassificationResult,
    /// Sound clip to play this frame, if any
    pub sound: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub correct: u32,
    pub incorrect: u32,
}

/// Seconds between two `performance.now()` readings
///
/// The first frame, and a clock that went backwards, count as zero.
pub fn frame_delta_seconds(last_ms: Option<f64>, now_ms: f64) -> f32 {
    match last_ms {
        Some(last) if now_ms.is_finite() && now_ms > last => ((now_ms - last) / 1000.0) as f32,
        _ => 0.0,
    }
}

/// Internal storage for the active session
#[derive(Default)]
pub(crate) struct SessionStore {
    classifier: Option<ExerciseClassifier>,
    last_timestamp_ms: Option<f64>,
}

impl SessionStore {
    pub fn configure(&mut self, config: &SessionConfig) -> Result<(), BridgeError> {
        let classifier = ExerciseClassifier::from_config(config)?;
        log::info!(
            "session configured: {} ({}, mirror={})",
            config.exercise,
            config.preset,
            config.mirror
        );
        self.classifier = Some(classifier);
        self.last_timestamp_ms = None;
        Ok(())
    }

    pub fn process(
        &mut self,
        data: &[f32],
        width: u32,
        height: u32,
        timestamp_ms: f64,
    ) -> Result<FrameOutput, BridgeError> {
        let classifier = self.classifier.as_mut().ok_or(BridgeError::NotConfigured)?;
        let landmarks = decode_landmarks(data)?;
        let frame = decode_frame_size(width, height)?;

        let dt = frame_delta_seconds(self.last_timestamp_ms, timestamp_ms);
        if timestamp_ms.is_finite() {
            self.last_timestamp_ms = Some(timestamp_ms);
        }

        let (commands, result) = classifier.process(landmarks.as_ref(), frame, dt);
        let sound = result.cue.map(|cue| cue.sound_name());
        Ok(FrameOutput {
            commands,
            result,
            sound,
        })
    }

    pub fn reset(&mut self) {
        if let Some(classifier) = self.classifier.as_mut() {
            classifier.reset();
        }
        self.last_timestamp_ms = None;
    }

    pub fn counts(&self) -> Result<Counts, BridgeError> {
        let state = self.classifier.as_ref().ok_or(BridgeError::NotConfigured)?.state();
        Ok(Counts {
            correct: state.correct_count(),
            incorrect: state.incorrect_count(),
        })
    }

    pub fn profile(&self) -> Result<ThresholdProfile, BridgeError> {
        self.classifier
            .as_ref()
            .map(|classifier| *classifier.profile())
            .ok_or(BridgeError::NotConfigured)
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionStore> = RefCell::new(SessionStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a new session from `{ exercise, preset, mirror }`
///
/// Missing fields take their defaults (bicep curl, beginner, mirrored).
#[wasm_bindgen(js_name = configureSession)]
pub fn configure_session(config: JsValue) -> Result<(), JsValue> {
    let config: SessionConfig = if config.is_undefined() || config.is_null() {
        SessionConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    SESSION.with(|cell| cell.borrow_mut().configure(&config))?;
    Ok(())
}

/// Process one video frame
///
/// `data` is 33 × [x, y, z, visibility] normalized landmarks, or empty when
/// no person was detected. `timestamp_ms` comes from `performance.now()`.
#[wasm_bindgen(js_name = processFrame)]
pub fn process_frame(data: &[f32], width: u32, height: u32, timestamp_ms: f64) -> Result<JsValue, JsValue> {
    let output = SESSION.with(|cell| cell.borrow_mut().process(data, width, height, timestamp_ms))?;
    Ok(serde_wasm_bindgen::to_value(&output)?)
}

/// Zero the counters and timers, keeping the exercise
#[wasm_bindgen(js_name = resetSession)]
pub fn reset_session() {
    SESSION.with(|cell| cell.borrow_mut().reset());
}

#[wasm_bindgen(js_name = getCounts)]
pub fn get_counts() -> Result<JsValue, JsValue> {
    let counts = SESSION.with(|cell| cell.borrow().counts())?;
    Ok(serde_wasm_bindgen::to_value(&counts)?)
}

/// Active threshold profile, for display in the UI
#[wasm_bindgen(js_name = getProfile)]
pub fn get_profile() -> Result<JsValue, JsValue> {
    let profile = SESSION.with(|cell| cell.borrow().profile())?;
    Ok(serde_wasm_bindgen::to_value(&profile)?)
}
