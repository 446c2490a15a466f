//! Configuration module - exercise selection and threshold presets
//!
//! Re-exports only. All logic in submodules.

mod error;
mod session;
mod thresholds;

pub use error::ConfigError;
pub use session::{ExerciseKind, SessionConfig};
pub use thresholds::{AngleBand, ElbowBands, Preset, ShoulderBounds, ThresholdProfile};
