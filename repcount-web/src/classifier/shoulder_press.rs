//! Shoulder press - angle at the left shoulder between the left elbow and
//! the right shoulder, camera facing the subject
//!
//! A rep opens with the arms high (s2) and closes when they come back
//! low (s1).

use crate::config::ThresholdProfile;
use crate::geometry::{joint_coord, FrameSize, JointTriple, LandmarkSet, LEFT_ELBOW, LEFT_SHOULDER, RIGHT_SHOULDER};

use super::exercise::{CameraView, TrackOutcome};
use super::feedback::FeedbackFlag;
use super::phase::{Phase, RepCycle};
use super::result::Cue;
use super::state::ExerciseState;

pub struct ShoulderPress;

impl ShoulderPress {
    pub const CYCLE: RepCycle = RepCycle {
        opening: Phase::PressHigh,
        closing: Phase::PressLow,
    };

    pub const VIEW: CameraView = CameraView::Front;

    pub fn classify(profile: &ThresholdProfile, angle: f32) -> Option<Phase> {
        let angle = angle.trunc();
        if angle < profile.shoulder.low {
            Some(Phase::PressLow)
        } else if angle > profile.shoulder.high {
            Some(Phase::PressHigh)
        } else {
            None
        }
    }

    /// Left elbow, left shoulder (vertex), right shoulder
    pub fn joints(landmarks: &LandmarkSet, frame: FrameSize) -> Option<JointTriple> {
        Some(JointTriple::new(
            joint_coord(landmarks, LEFT_ELBOW, frame)?,
            joint_coord(landmarks, LEFT_SHOULDER, frame)?,
            joint_coord(landmarks, RIGHT_SHOULDER, frame)?,
        ))
    }

    pub(crate) fn track(
        state: &mut ExerciseState,
        profile: &ThresholdProfile,
        landmarks: &LandmarkSet,
        frame: FrameSize,
    ) -> TrackOutcome {
        state.lower_arms = false;

        let Some(joints) = Self::joints(landmarks, frame) else {
            return TrackOutcome::default();
        };
        let mut outcome = TrackOutcome {
            joints: Some(joints),
            ..TrackOutcome::default()
        };

        let Some(angle) = joints.angle() else {
            return outcome;
        };
        outcome.angle = Some(angle);

        let phase = Self::classify(profile, angle);
        if phase == Some(Phase::PressHigh) {
            state.feedback.set(FeedbackFlag::LowerArms);
        }

        let cue = state.observe(phase, Self::CYCLE);
        if cue == Some(Cue::IncorrectRep) {
            state.feedback.set(FeedbackFlag::RaiseArms);
        }

        outcome.phase = phase;
        outcome.cue = cue;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fixtures::{press_frame, FRAME};

    fn run(state: &mut ExerciseState, profile: &ThresholdProfile, angles: &[f32]) -> Vec<TrackOutcome> {
        angles
            .iter()
            .map(|&angle| {
                let outcome = ShoulderPress::track(state, profile, &press_frame(angle), FRAME);
                state.tick_feedback(profile.frame_count_threshold);
                outcome
            })
            .collect()
    }

    #[test]
    fn test_classify_cutoffs() {
        let beginner = ThresholdProfile::beginner();
        assert_eq!(ShoulderPress::classify(&beginner, 99.5), Some(Phase::PressLow));
        assert_eq!(ShoulderPress::classify(&beginner, 100.0), None);
        assert_eq!(ShoulderPress::classify(&beginner, 150.9), None);
        assert_eq!(ShoulderPress::classify(&beginner, 151.0), Some(Phase::PressHigh));

        let pro = ThresholdProfile::pro();
        assert_eq!(ShoulderPress::classify(&pro, 97.0), None);
        assert_eq!(ShoulderPress::classify(&pro, 155.0), None);
    }

    #[test]
    fn test_fixture_produces_requested_angle() {
        let joints = ShoulderPress::joints(&press_frame(123.5), FRAME).unwrap();
        assert!((joints.angle().unwrap() - 123.5).abs() < 0.01);
    }

    #[test]
    fn test_press_cycle_counts() {
        let profile = ThresholdProfile::beginner();
        let mut state = ExerciseState::new();

        let outcomes = run(&mut state, &profile, &[80.0, 125.0, 165.0, 125.0, 80.0]);
        assert_eq!(outcomes[2].phase, Some(Phase::PressHigh));
        assert_eq!(outcomes[4].cue, Some(Cue::RepCompleted(1)));

        run(&mut state, &profile, &[165.0, 80.0]);
        assert_eq!(state.correct_count(), 2);
        assert_eq!(state.incorrect_count(), 0);
    }

    #[test]
    fn test_arms_high_asks_to_lower() {
        let profile = ThresholdProfile::beginner();
        let mut state = ExerciseState::new();
        run(&mut state, &profile, &[165.0]);
        assert_eq!(state.active_feedback(), vec![FeedbackFlag::LowerArms]);
    }

    #[test]
    fn test_interrupted_press_is_incorrect() {
        let profile = ThresholdProfile::beginner();
        let mut state = ExerciseState::new();
        run(&mut state, &profile, &[165.0]);
        state.on_subject_absent(0.5, profile.inactive_threshold);

        let outcomes = run(&mut state, &profile, &[80.0]);
        assert_eq!(outcomes[0].cue, Some(Cue::IncorrectRep));
        assert!(state.feedback().is_active(FeedbackFlag::RaiseArms));
        assert_eq!(state.incorrect_count(), 1);
    }

    #[test]
    fn test_low_without_press_counts_nothing() {
        let profile = ThresholdProfile::beginner();
        let mut state = ExerciseState::new();
        let outcomes = run(&mut state, &profile, &[80.0, 125.0, 80.0]);
        assert!(outcomes.iter().all(|o| o.cue.is_none()));
        assert_eq!(state.correct_count() + state.incorrect_count(), 0);
    }
}
