//! Session configuration - which exercise, which preset
//!
//! Deserialized from the plain JS object passed to `configureSession`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::thresholds::Preset;

/// Exercises offered by the UI
///
/// Only bicep curl and shoulder press have a rep counter; the rest are
/// rejected when a classifier is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ExerciseKind {
    Squat,
    #[default]
    BicepCurl,
    Pushup,
    ShoulderPress,
    TricepExtension,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 5] = [
        ExerciseKind::Squat,
        ExerciseKind::BicepCurl,
        ExerciseKind::Pushup,
        ExerciseKind::ShoulderPress,
        ExerciseKind::TricepExtension,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::BicepCurl => "bicep_curl",
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::ShoulderPress => "shoulder_press",
            ExerciseKind::TricepExtension => "tricep_extension",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = ConfigError;

    /// Accepts snake_case names and the UI labels ("Bicep Curls", "Pushups")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == ' ' || c == '-', "_");

        match key.as_str() {
            "squat" | "squats" => Ok(ExerciseKind::Squat),
            "bicep_curl" | "bicep_curls" => Ok(ExerciseKind::BicepCurl),
            "pushup" | "pushups" | "push_up" | "push_ups" => Ok(ExerciseKind::Pushup),
            "shoulder_press" => Ok(ExerciseKind::ShoulderPress),
            "tricep_extension" | "tricep_extensions" => Ok(ExerciseKind::TricepExtension),
            _ => Err(ConfigError::UnknownExercise(s.to_string())),
        }
    }
}

impl TryFrom<String> for ExerciseKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything needed to start a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub exercise: ExerciseKind,
    pub preset: Preset,
    /// Mirror overlay x positions (selfie camera)
    pub mirror: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exercise: ExerciseKind::BicepCurl,
            preset: Preset::Beginner,
            mirror: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_labels_parse() {
        assert_eq!("Squats".parse::<ExerciseKind>(), Ok(ExerciseKind::Squat));
        assert_eq!("Bicep Curls".parse::<ExerciseKind>(), Ok(ExerciseKind::BicepCurl));
        assert_eq!("Pushups".parse::<ExerciseKind>(), Ok(ExerciseKind::Pushup));
        assert_eq!("Shoulder Press".parse::<ExerciseKind>(), Ok(ExerciseKind::ShoulderPress));
        assert_eq!("Tricep Extensions".parse::<ExerciseKind>(), Ok(ExerciseKind::TricepExtension));
    }

    #[test]
    fn test_snake_case_names_round_trip() {
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.to_string().parse::<ExerciseKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_exercise() {
        assert_eq!(
            "deadlift".parse::<ExerciseKind>(),
            Err(ConfigError::UnknownExercise("deadlift".to_string()))
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "exercise": "Bicep Curls", "preset": "pro" }"#).unwrap();
        assert_eq!(config.exercise, ExerciseKind::BicepCurl);
        assert_eq!(config.preset, Preset::Pro);
        assert!(config.mirror);

        let config: SessionConfig = serde_json::from_str(r#"{ "mirror": false }"#).unwrap();
        assert_eq!(config.exercise, ExerciseKind::BicepCurl);
        assert!(!config.mirror);

        assert!(serde_json::from_str::<SessionConfig>(r#"{ "exercise": "yoga" }"#).is_err());
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&SessionConfig::default()).unwrap();
        assert_eq!(json, r#"{"exercise":"bicep_curl","preset":"beginner","mirror":true}"#);
    }
}
