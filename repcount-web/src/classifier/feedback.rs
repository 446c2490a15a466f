//! Posture feedback flags with frame-count expiry
//!
//! A flag raised by one bad frame stays visible for a while, then clears
//! itself so a stale warning does not stick after the condition passes.

use serde::Serialize;

/// Feedback shown to the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackFlag {
    LowerArms,
    BendElbows,
    StraightenArms,
    RaiseArms,
}

impl FeedbackFlag {
    pub const ALL: [FeedbackFlag; 4] = [
        FeedbackFlag::LowerArms,
        FeedbackFlag::BendElbows,
        FeedbackFlag::StraightenArms,
        FeedbackFlag::RaiseArms,
    ];

    pub fn message(self) -> &'static str {
        match self {
            FeedbackFlag::LowerArms => "LOWER YOUR ARMS",
            FeedbackFlag::BendElbows => "BEND YOUR ELBOWS",
            FeedbackFlag::StraightenArms => "STRAIGHTEN YOUR ARMS",
            FeedbackFlag::RaiseArms => "RAISE YOUR ARMS HIGHER",
        }
    }
}

/// One flag plus the number of frames it has been up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebouncedFlag {
    active: bool,
    frames: u32,
}

impl DebouncedFlag {
    /// Raise the flag. Raising an active flag does not restart its counter.
    pub fn set(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Count one frame; clears flag and counter once the count exceeds `limit`
    pub fn tick(&mut self, limit: u32) {
        if !self.active {
            return;
        }
        self.frames += 1;
        if self.frames > limit {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// All debounced feedback flags of one exercise instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackFlags {
    pub lower_arms: DebouncedFlag,
    pub bend_elbows: DebouncedFlag,
    pub straighten_arms: DebouncedFlag,
    pub raise_arms: DebouncedFlag,
}

impl FeedbackFlags {
    pub fn get(&self, flag: FeedbackFlag) -> &DebouncedFlag {
        match flag {
            FeedbackFlag::LowerArms => &self.lower_arms,
            FeedbackFlag::BendElbows => &self.bend_elbows,
            FeedbackFlag::StraightenArms => &self.straighten_arms,
            FeedbackFlag::RaiseArms => &self.raise_arms,
        }
    }

    pub fn get_mut(&mut self, flag: FeedbackFlag) -> &mut DebouncedFlag {
        match flag {
            FeedbackFlag::LowerArms => &mut self.lower_arms,
            FeedbackFlag::BendElbows => &mut self.bend_elbows,
            FeedbackFlag::StraightenArms => &mut self.straighten_arms,
            FeedbackFlag::RaiseArms => &mut self.raise_arms,
        }
    }

    pub fn set(&mut self, flag: FeedbackFlag) {
        self.get_mut(flag).set();
    }

    pub fn is_active(&self, flag: FeedbackFlag) -> bool {
        self.get(flag).is_active()
    }

    pub fn tick(&mut self, limit: u32) {
        for flag in FeedbackFlag::ALL {
            self.get_mut(flag).tick(limit);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Active flags in display order
    pub fn active(&self) -> impl Iterator<Item = FeedbackFlag> + '_ {
        FeedbackFlag::ALL
            .into_iter()
            .filter(move |&flag| self.is_active(flag))
    }
}
