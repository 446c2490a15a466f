//! Configuration errors
//!
//! The only errors the core reports. They occur while building a session,
//! before any frame is processed.

use thiserror::Error;

use super::session::ExerciseKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown exercise: {0:?}")]
    UnknownExercise(String),

    #[error("unknown difficulty preset: {0:?}")]
    UnknownPreset(String),

    #[error("no rep counter available for {0}")]
    UnsupportedExercise(ExerciseKind),
}
