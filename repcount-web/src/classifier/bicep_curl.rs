//! Bicep curl - elbow angle on the arm facing the camera
//!
//! A rep opens with the arm extended (e2) and closes when the elbow reaches
//! the curl-top band (e1). The camera is expected side-on to the subject.

use crate::config::ThresholdProfile;
use crate::geometry::{joint_coord, FrameSize, JointTriple, LandmarkSet, Side};

use super::exercise::{CameraView, TrackOutcome};
use super::feedback::FeedbackFlag;
use super::phase::{Phase, RepCycle};
use super::state::ExerciseState;

/// Degrees the elbow may re-open from its lowest point before the curl is
/// considered abandoned short of the top
const REVERSAL_MARGIN: f32 = 15.0;

pub struct BicepCurl;

impl BicepCurl {
    pub const CYCLE: RepCycle = RepCycle {
        opening: Phase::CurlExtended,
        closing: Phase::CurlTop,
    };

    pub const VIEW: CameraView = CameraView::Side;

    /// Map an elbow angle to its phase; whole degrees decide the band
    pub fn classify(profile: &ThresholdProfile, angle: f32) -> Option<Phase> {
        let angle = angle.trunc();
        if profile.elbow.top.contains(angle) {
            Some(Phase::CurlTop)
        } else if profile.elbow.extended.contains(angle) {
            Some(Phase::CurlExtended)
        } else {
            None
        }
    }

    /// Pick the arm to analyze and return it with its joints
    ///
    /// Among sides with a visible arm, prefer the larger shoulder-hip
    /// vertical span; without both hips, the higher mean arm visibility.
    /// Ties go to the right side.
    pub fn select_side(landmarks: &LandmarkSet, frame: FrameSize) -> Option<(Side, JointTriple)> {
        let left = Side::Left.arm(landmarks, frame);
        let right = Side::Right.arm(landmarks, frame);

        match (left, right) {
            (None, None) => None,
            (Some(arm), None) => Some((Side::Left, arm)),
            (None, Some(arm)) => Some((Side::Right, arm)),
            (Some(left_arm), Some(right_arm)) => {
                let prefer_left = match (
                    torso_span(landmarks, Side::Left, frame),
                    torso_span(landmarks, Side::Right, frame),
                ) {
                    (Some(left_span), Some(right_span)) => left_span > right_span,
                    _ => Side::Left.arm_visibility(landmarks) > Side::Right.arm_visibility(landmarks),
                };

                if prefer_left {
                    Some((Side::Left, left_arm))
                } else {
                    Some((Side::Right, right_arm))
                }
            }
        }
    }

    /// One aligned frame of tracking
    pub(crate) fn track(
        state: &mut ExerciseState,
        profile: &ThresholdProfile,
        landmarks: &LandmarkSet,
        frame: FrameSize,
    ) -> TrackOutcome {
        state.lower_arms = false;

        let Some((side, joints)) = Self::select_side(landmarks, frame) else {
            return TrackOutcome::default();
        };
        let mut outcome = TrackOutcome {
            joints: Some(joints),
            side: Some(side),
            ..TrackOutcome::default()
        };

        let Some(angle) = joints.angle() else {
            return outcome;
        };
        outcome.angle = Some(angle);

        let phase = Self::classify(profile, angle);
        match phase {
            Some(Phase::CurlExtended) => state.cycle_min_angle = None,
            None => Self::transition_feedback(state, profile, angle),
            _ => {}
        }

        outcome.phase = phase;
        outcome.cue = state.observe(phase, Self::CYCLE);
        outcome
    }

    fn transition_feedback(state: &mut ExerciseState, profile: &ThresholdProfile, angle: f32) {
        let elbow = &profile.elbow;
        let whole = angle.trunc();

        if whole < elbow.top.lo {
            state.feedback.set(FeedbackFlag::StraightenArms);
            // Only a rep in progress can be spoiled
            if state.sequence.contains(Phase::CurlExtended) {
                state.posture_violation = true;
            }
        } else if state.sequence.contains(Phase::CurlExtended) {
            let lowest = state.track_min_angle(angle);
            if angle - lowest > REVERSAL_MARGIN {
                state.feedback.set(FeedbackFlag::BendElbows);
            }
        } else if state.sequence.is_empty() && elbow.normal.contains(whole) {
            state.lower_arms = true;
        }
    }
}

/// Vertical distance between shoulder and hip on one side, in pixels
fn torso_span(landmarks: &LandmarkSet, side: Side, frame: FrameSize) -> Option<f32> {
    let shoulder = joint_coord(landmarks, side.shoulder(), frame)?;
    let hip = joint_coord(landmarks, side.hip(), frame)?;
    Some((shoulder.y - hip.y).abs())
}
