//! Exercise state - counters, phases, timers and feedback for one session
//!
//! Mutated once per processed frame. Time only enters through the `dt`
//! arguments, so the state machine runs without a clock.

use super::feedback::{FeedbackFlag, FeedbackFlags};
use super::phase::{Phase, PhaseSequence, RepCycle};
use super::result::Cue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExerciseState {
    pub(crate) sequence: PhaseSequence,
    pub(crate) current_phase: Option<Phase>,
    pub(crate) previous_phase: Option<Phase>,

    pub(crate) correct_count: u32,
    pub(crate) incorrect_count: u32,

    /// Bad posture seen since the last rep boundary
    pub(crate) posture_violation: bool,
    /// Subject was lost after the opening phase was recorded
    pub(crate) cycle_interrupted: bool,
    /// Smallest angle reached since the opening phase
    pub(crate) cycle_min_angle: Option<f32>,

    /// Per-frame flag, recomputed on every classified frame
    pub(crate) lower_arms: bool,
    pub(crate) feedback: FeedbackFlags,

    /// Seconds without a detected subject
    pub(crate) inactivity_timer: f32,
    /// Seconds with a misaligned camera
    pub(crate) inactivity_timer_front: f32,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn current_phase(&self) -> Option<Phase> {
        self.current_phase
    }

    pub fn previous_phase(&self) -> Option<Phase> {
        self.previous_phase
    }

    pub fn sequence(&self) -> &PhaseSequence {
        &self.sequence
    }

    pub fn posture_violation(&self) -> bool {
        self.posture_violation
    }

    pub fn feedback(&self) -> &FeedbackFlags {
        &self.feedback
    }

    pub fn inactivity_timer(&self) -> f32 {
        self.inactivity_timer
    }

    pub fn inactivity_timer_front(&self) -> f32 {
        self.inactivity_timer_front
    }

    /// Active feedback: debounced flags plus the per-frame lower-arms flag
    pub fn active_feedback(&self) -> Vec<FeedbackFlag> {
        let mut flags: Vec<FeedbackFlag> = self.feedback.active().collect();
        if self.lower_arms && !flags.contains(&FeedbackFlag::LowerArms) {
            flags.insert(0, FeedbackFlag::LowerArms);
        }
        flags
    }

    // ========================================================================
    // BRANCH TRANSITIONS
    // ========================================================================

    /// No subject in frame. Returns true on the frame the counters reset.
    pub(crate) fn on_subject_absent(&mut self, dt: f32, inactive_threshold: f32) -> bool {
        self.inactivity_timer += dt;
        self.inactivity_timer_front = 0.0;

        self.current_phase = None;
        self.previous_phase = None;
        self.posture_violation = false;
        self.lower_arms = false;
        self.feedback.clear();
        if !self.sequence.is_empty() {
            self.cycle_interrupted = true;
        }

        if self.inactivity_timer >= inactive_threshold {
            self.reset_counters();
            self.inactivity_timer = 0.0;
            return true;
        }
        false
    }

    /// Subject present but camera misaligned. Phases are kept.
    /// Returns true on the frame the counters reset.
    pub(crate) fn on_misaligned(&mut self, dt: f32, inactive_threshold: f32) -> bool {
        self.inactivity_timer = 0.0;
        self.inactivity_timer_front += dt;
        self.lower_arms = false;

        if self.inactivity_timer_front >= inactive_threshold {
            self.reset_counters();
            self.inactivity_timer_front = 0.0;
            return true;
        }
        false
    }

    /// Subject present and aligned
    pub(crate) fn on_aligned(&mut self) {
        self.inactivity_timer = 0.0;
        self.inactivity_timer_front = 0.0;
    }

    // ========================================================================
    // PHASE TRACKING
    // ========================================================================

    /// Record this frame's phase and grade a rep when the cycle closes
    pub(crate) fn observe(&mut self, phase: Option<Phase>, cycle: RepCycle) -> Option<Cue> {
        self.previous_phase = self.current_phase;
        self.current_phase = phase;

        let phase = phase?;
        self.sequence.record(phase, cycle, self.cycle_interrupted);

        if phase == cycle.closing {
            self.complete_rep(cycle)
        } else {
            None
        }
    }

    /// Grade the cycle that just closed and start a new one
    fn complete_rep(&mut self, cycle: RepCycle) -> Option<Cue> {
        let cue = if self.sequence.len() == 2 && !self.posture_violation {
            self.correct_count += 1;
            log::debug!("rep {} completed", self.correct_count);
            Some(Cue::RepCompleted(self.correct_count))
        } else if self.sequence.is_only(cycle.opening) || self.posture_violation {
            self.incorrect_count += 1;
            log::debug!("incorrect rep ({} total)", self.incorrect_count);
            Some(Cue::IncorrectRep)
        } else {
            None
        };

        self.start_cycle();
        cue
    }

    fn start_cycle(&mut self) {
        self.sequence.clear();
        self.posture_violation = false;
        self.cycle_interrupted = false;
        self.cycle_min_angle = None;
    }

    /// Lowest angle seen this cycle, updated with `angle`
    pub(crate) fn track_min_angle(&mut self, angle: f32) -> f32 {
        let min = self.cycle_min_angle.map_or(angle, |m| m.min(angle));
        self.cycle_min_angle = Some(min);
        min
    }

    /// Advance feedback expiry by one tracking frame
    pub(crate) fn tick_feedback(&mut self, frame_count_threshold: u32) {
        self.feedback.tick(frame_count_threshold);
    }

    fn reset_counters(&mut self) {
        log::info!(
            "resetting counters after inactivity (correct {}, incorrect {})",
            self.correct_count,
            self.incorrect_count
        );
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.start_cycle();
    }
}
