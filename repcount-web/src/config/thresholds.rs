//! Threshold profiles - angle bands and timing constants per difficulty
//!
//! Pure data. A classifier copies one profile at construction and never
//! mutates it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Closed range of angles in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleBand {
    pub lo: f32,
    pub hi: f32,
}

impl AngleBand {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, angle: f32) -> bool {
        self.lo <= angle && angle <= self.hi
    }
}

/// Elbow angle bands for the bicep curl
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElbowBands {
    /// Curl top: elbow fully flexed
    pub top: AngleBand,
    /// Travel between top and extended
    pub normal: AngleBand,
    /// Arm hanging straight
    pub extended: AngleBand,
}

/// Shoulder angle cutoffs for the shoulder press
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoulderBounds {
    /// Below this the arms are low
    pub low: f32,
    /// Above this the arms are high
    pub high: f32,
}

/// All numeric bounds one classifier needs
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProfile {
    pub elbow: ElbowBands,
    pub shoulder: ShoulderBounds,
    /// Nose-to-shoulders offset angle (degrees) separating side and front views
    pub offset_threshold: f32,
    /// Seconds of absence or misalignment before counters reset
    pub inactive_threshold: f32,
    /// Frames a feedback message stays up after being raised
    pub frame_count_threshold: u32,
}

impl ThresholdProfile {
    pub fn beginner() -> Self {
        Self {
            elbow: ElbowBands {
                top: AngleBand::new(15.0, 29.0),
                normal: AngleBand::new(30.0, 150.0),
                extended: AngleBand::new(151.0, 180.0),
            },
            shoulder: ShoulderBounds {
                low: 100.0,
                high: 150.0,
            },
            offset_threshold: 35.0,
            inactive_threshold: 15.0,
            frame_count_threshold: 50,
        }
    }

    pub fn pro() -> Self {
        Self {
            shoulder: ShoulderBounds {
                low: 95.0,
                high: 160.0,
            },
            ..Self::beginner()
        }
    }
}

/// Named difficulty preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Preset {
    #[default]
    Beginner,
    Pro,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Beginner, Preset::Pro];

    pub fn profile(self) -> ThresholdProfile {
        match self {
            Preset::Beginner => ThresholdProfile::beginner(),
            Preset::Pro => ThresholdProfile::pro(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Beginner => "beginner",
            Preset::Pro => "pro",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Preset::Beginner),
            "pro" => Ok(Preset::Pro),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl TryFrom<String> for Preset {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
