//! Discrete exercise phases and the per-rep phase sequence

use serde::Serialize;

/// Discrete phase an angle falls into
///
/// Angles between bands have no phase (transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Elbow flexed into the curl-top band
    #[serde(rename = "e1")]
    CurlTop,
    /// Arm hanging straight
    #[serde(rename = "e2")]
    CurlExtended,
    /// Shoulder angle below the low cutoff
    #[serde(rename = "s1")]
    PressLow,
    /// Shoulder angle above the high cutoff
    #[serde(rename = "s2")]
    PressHigh,
}

impl Phase {
    pub fn tag(self) -> &'static str {
        match self {
            Phase::CurlTop => "e1",
            Phase::CurlExtended => "e2",
            Phase::PressLow => "s1",
            Phase::PressHigh => "s2",
        }
    }
}

/// The two phases that bound one repetition
///
/// A rep is graded on the frame the closing phase is observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepCycle {
    pub opening: Phase,
    pub closing: Phase,
}

/// Phases seen since the last rep boundary
///
/// Holds at most one opening and one closing entry, opening first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseSequence {
    phases: Vec<Phase>,
}

impl PhaseSequence {
    pub fn new() -> Self {
        Self {
            phases: Vec::with_capacity(2),
        }
    }

    /// Record `phase` if it is forward progress through `cycle`
    ///
    /// - opening: recorded once per cycle
    /// - closing: recorded only after the opening, and only if the cycle was
    ///   tracked without interruption
    ///
    /// Returns whether the phase was appended.
    pub fn record(&mut self, phase: Phase, cycle: RepCycle, interrupted: bool) -> bool {
        let forward = if phase == cycle.opening {
            !self.contains(phase)
        } else if phase == cycle.closing {
            self.contains(cycle.opening) && !self.contains(phase) && !interrupted
        } else {
            false
        };

        if forward {
            self.phases.push(phase);
        }
        forward
    }

    pub fn contains(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    /// True if the sequence is exactly `[phase]`
    pub fn is_only(&self, phase: Phase) -> bool {
        self.phases == [phase]
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Phase] {
        &self.phases
    }

    pub fn clear(&mut self) {
        self.phases.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURL: RepCycle = RepCycle {
        opening: Phase::CurlExtended,
        closing: Phase::CurlTop,
    };

    #[test]
    fn test_opening_recorded_once() {
        let mut seq = PhaseSequence::new();
        assert!(seq.record(Phase::CurlExtended, CURL, false));
        assert!(!seq.record(Phase::CurlExtended, CURL, false));
        assert_eq!(seq.as_slice(), &[Phase::CurlExtended]);
    }

    #[test]
    fn test_closing_needs_opening_first() {
        let mut seq = PhaseSequence::new();
        assert!(!seq.record(Phase::CurlTop, CURL, false));
        assert!(seq.is_empty());

        seq.record(Phase::CurlExtended, CURL, false);
        assert!(seq.record(Phase::CurlTop, CURL, false));
        assert!(!seq.record(Phase::CurlTop, CURL, false));
        assert_eq!(seq.as_slice(), &[Phase::CurlExtended, Phase::CurlTop]);
    }

    #[test]
    fn test_interrupted_cycle_keeps_only_opening() {
        let mut seq = PhaseSequence::new();
        seq.record(Phase::CurlExtended, CURL, false);
        assert!(!seq.record(Phase::CurlTop, CURL, true));
        assert!(seq.is_only(Phase::CurlExtended));
    }

    #[test]
    fn test_foreign_phase_ignored() {
        let mut seq = PhaseSequence::new();
        assert!(!seq.record(Phase::PressHigh, CURL, false));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_tags() {
        assert_eq!(Phase::CurlTop.tag(), "e1");
        assert_eq!(Phase::CurlExtended.tag(), "e2");
        assert_eq!(Phase::PressLow.tag(), "s1");
        assert_eq!(Phase::PressHigh.tag(), "s2");
        assert_eq!(serde_json::to_string(&Phase::PressHigh).unwrap(), "\"s2\"");
    }
}
