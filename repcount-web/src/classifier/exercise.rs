//! Exercise classifier - per-frame dispatch for one session
//!
//! Every frame takes exactly one of three branches:
//! 1. no subject          -> absence timer, edge-triggered reset
//! 2. camera misaligned   -> alignment timer, edge-triggered reset, phases kept
//! 3. normal tracking     -> angle, phase, rep grading, feedback

use crate::config::{ConfigError, ExerciseKind, SessionConfig, ThresholdProfile};
use crate::geometry::{FrameSize, JointTriple, LandmarkSet, Side, Torso};
use crate::overlay::{self, DrawCommand, Scene};

use super::bicep_curl::BicepCurl;
use super::phase::{Phase, RepCycle};
use super::result::{ClassificationResult, Cue, ResetReason};
use super::shoulder_press::ShoulderPress;
use super::state::ExerciseState;

// ============================================================================
// CAMERA VIEW
// ============================================================================

/// Camera placement an exercise is filmed from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraView {
    /// Subject side-on, shoulders overlap (small offset angle)
    Side,
    /// Subject facing the camera (large offset angle)
    Front,
}

impl CameraView {
    /// The threshold value itself counts as aligned
    pub fn is_misaligned(self, offset_angle: f32, threshold: f32) -> bool {
        match self {
            CameraView::Side => offset_angle > threshold,
            CameraView::Front => offset_angle < threshold,
        }
    }
}

// ============================================================================
// MOVEMENTS
// ============================================================================

/// What one tracking frame measured
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackOutcome {
    pub joints: Option<JointTriple>,
    pub side: Option<Side>,
    pub angle: Option<f32>,
    pub phase: Option<Phase>,
    pub cue: Option<Cue>,
}

/// Exercises with a rep counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    BicepCurl,
    ShoulderPress,
}

impl Movement {
    pub fn from_kind(kind: ExerciseKind) -> Result<Self, ConfigError> {
        match kind {
            ExerciseKind::BicepCurl => Ok(Movement::BicepCurl),
            ExerciseKind::ShoulderPress => Ok(Movement::ShoulderPress),
            other => Err(ConfigError::UnsupportedExercise(other)),
        }
    }

    pub fn kind(self) -> ExerciseKind {
        match self {
            Movement::BicepCurl => ExerciseKind::BicepCurl,
            Movement::ShoulderPress => ExerciseKind::ShoulderPress,
        }
    }

    pub fn cycle(self) -> RepCycle {
        match self {
            Movement::BicepCurl => BicepCurl::CYCLE,
            Movement::ShoulderPress => ShoulderPress::CYCLE,
        }
    }

    pub fn view(self) -> CameraView {
        match self {
            Movement::BicepCurl => BicepCurl::VIEW,
            Movement::ShoulderPress => ShoulderPress::VIEW,
        }
    }

    fn track(
        self,
        state: &mut ExerciseState,
        profile: &ThresholdProfile,
        landmarks: &LandmarkSet,
        frame: FrameSize,
    ) -> TrackOutcome {
        match self {
            Movement::BicepCurl => BicepCurl::track(state, profile, landmarks, frame),
            Movement::ShoulderPress => ShoulderPress::track(state, profile, landmarks, frame),
        }
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

#[derive(Clone, Debug)]
pub struct ExerciseClassifier {
    movement: Movement,
    profile: ThresholdProfile,
    state: ExerciseState,
    mirror: bool,
}

impl ExerciseClassifier {
    pub fn new(kind: ExerciseKind, profile: ThresholdProfile, mirror: bool) -> Result<Self, ConfigError> {
        let movement = Movement::from_kind(kind)?;
        log::info!("classifier ready: {kind}");
        Ok(Self {
            movement,
            profile,
            state: ExerciseState::new(),
            mirror,
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        Self::new(config.exercise, config.preset.profile(), config.mirror)
    }

    pub fn kind(&self) -> ExerciseKind {
        self.movement.kind()
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn profile(&self) -> &ThresholdProfile {
        &self.profile
    }

    pub fn state(&self) -> &ExerciseState {
        &self.state
    }

    /// Drop counters, phases and timers; keep exercise and profile
    pub fn reset(&mut self) {
        log::info!("session reset");
        self.state = ExerciseState::new();
    }

    /// Process one frame
    ///
    /// `landmarks` is `None` when the pose model found no subject. `dt` is
    /// the time since the previous frame in seconds; negative or non-finite
    /// values count as zero.
    pub fn process(
        &mut self,
        landmarks: Option<&LandmarkSet>,
        frame: FrameSize,
        dt: f32,
    ) -> (Vec<DrawCommand>, ClassificationResult) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let (result, scene) = match landmarks {
            None => self.subject_absent(dt),
            Some(landmarks) => {
                let torso = Torso::extract(landmarks, frame);
                match torso.and_then(|t| t.offset_angle().map(|offset| (t, offset))) {
                    Some((torso, offset))
                        if self.movement.view().is_misaligned(offset, self.profile.offset_threshold) =>
                    {
                        self.misaligned(torso, offset, dt)
                    }
                    measured => self.tracking(landmarks, frame, measured.map(|(_, offset)| offset)),
                }
            }
        };

        let commands = overlay::annotate(&result, &scene, frame, self.mirror);
        (commands, result)
    }

    fn subject_absent(&mut self, dt: f32) -> (ClassificationResult, Scene) {
        let reset = self
            .state
            .on_subject_absent(dt, self.profile.inactive_threshold);

        let mut result = self.base_result(false);
        if reset {
            result.counters_reset = Some(ResetReason::SubjectAbsent);
            result.cue = Some(Cue::ResetCounters);
        }
        (result, Scene::Absent)
    }

    fn misaligned(&mut self, torso: Torso, offset: f32, dt: f32) -> (ClassificationResult, Scene) {
        let reset = self
            .state
            .on_misaligned(dt, self.profile.inactive_threshold);
        self.state.tick_feedback(self.profile.frame_count_threshold);

        let mut result = self.base_result(true);
        result.alignment_warning = true;
        result.alignment_offset_angle = Some(offset);
        if reset {
            result.counters_reset = Some(ResetReason::CameraMisaligned);
            result.cue = Some(Cue::ResetCounters);
        }
        (result, Scene::Misaligned { torso })
    }

    fn tracking(
        &mut self,
        landmarks: &LandmarkSet,
        frame: FrameSize,
        offset: Option<f32>,
    ) -> (ClassificationResult, Scene) {
        self.state.on_aligned();
        let outcome = self
            .movement
            .track(&mut self.state, &self.profile, landmarks, frame);
        self.state.tick_feedback(self.profile.frame_count_threshold);

        let mut result = self.base_result(true);
        result.phase = outcome.phase;
        result.cue = outcome.cue;
        result.joint_angle = outcome.angle;
        result.side = outcome.side;
        result.alignment_offset_angle = offset;
        (result, Scene::Tracking { joints: outcome.joints })
    }

    fn base_result(&self, subject_present: bool) -> ClassificationResult {
        ClassificationResult {
            correct_count: self.state.correct_count(),
            incorrect_count: self.state.incorrect_count(),
            feedback: self.state.active_feedback(),
            subject_present,
            ..ClassificationResult::default()
        }
    }
}
