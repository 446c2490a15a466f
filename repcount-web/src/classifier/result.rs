//! Per-frame classification result handed to the renderer and audio layer

use serde::Serialize;

use super::feedback::FeedbackFlag;
use super::phase::Phase;
use crate::geometry::Side;

/// Why the counters were reset this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetReason {
    SubjectAbsent,
    CameraMisaligned,
}

/// Audio cue triggered by this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Cue {
    /// Correct rep, carrying the new correct count
    RepCompleted(u32),
    IncorrectRep,
    ResetCounters,
}

impl Cue {
    /// Name of the sound clip to play ("1", "2", ..., "incorrect", "reset_counters")
    pub fn sound_name(&self) -> String {
        match self {
            Cue::RepCompleted(count) => count.to_string(),
            Cue::IncorrectRep => "incorrect".to_string(),
            Cue::ResetCounters => "reset_counters".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Discrete phase this frame, `None` for transition or untracked frames
    pub phase: Option<Phase>,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Active feedback, in display order
    pub feedback: Vec<FeedbackFlag>,
    /// Nose-to-shoulders offset angle in degrees, when measurable
    pub alignment_offset_angle: Option<f32>,
    /// Camera is not positioned for this exercise
    pub alignment_warning: bool,
    pub subject_present: bool,
    /// Set only on the frame the reset happens
    pub counters_reset: Option<ResetReason>,
    pub cue: Option<Cue>,
    /// Measured joint angle in degrees (elbow or shoulder)
    pub joint_angle: Option<f32>,
    /// Side analyzed for single-arm exercises
    pub side: Option<Side>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_names() {
        assert_eq!(Cue::RepCompleted(7).sound_name(), "7");
        assert_eq!(Cue::IncorrectRep.sound_name(), "incorrect");
        assert_eq!(Cue::ResetCounters.sound_name(), "reset_counters");
    }

    #[test]
    fn test_serializes_for_js() {
        let result = ClassificationResult {
            phase: Some(Phase::CurlTop),
            correct_count: 3,
            feedback: vec![FeedbackFlag::LowerArms],
            subject_present: true,
            cue: Some(Cue::RepCompleted(3)),
            side: Some(Side::Right),
            ..Default::default()
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["phase"], "e1");
        assert_eq!(json["correctCount"], 3);
        assert_eq!(json["incorrectCount"], 0);
        assert_eq!(json["feedback"][0], "lower_arms");
        assert_eq!(json["alignmentWarning"], false);
        assert_eq!(json["countersReset"], serde_json::Value::Null);
        assert_eq!(json["cue"]["kind"], "rep_completed");
        assert_eq!(json["cue"]["count"], 3);
        assert_eq!(json["side"], "right");
    }
}
