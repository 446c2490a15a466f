//! Classifier module - rep counting and posture feedback per exercise
//!
//! Re-exports only. All logic in submodules.

mod bicep_curl;
mod exercise;
mod feedback;
mod phase;
mod result;
mod shoulder_press;
mod state;

#[cfg(test)]
mod fixtures;

pub use bicep_curl::BicepCurl;
pub use exercise::{CameraView, ExerciseClassifier, Movement, TrackOutcome};
pub use feedback::{DebouncedFlag, FeedbackFlag, FeedbackFlags};
pub use phase::{Phase, PhaseSequence, RepCycle};
pub use result::{ClassificationResult, Cue, ResetReason};
pub use shoulder_press::ShoulderPress;
pub use state::ExerciseState;
