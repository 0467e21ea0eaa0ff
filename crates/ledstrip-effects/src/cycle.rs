//! Timed effect rotation
//!
//! Counts ticks and moves to the next [`EffectId`] once the current one
//! has been shown for `ticks_per_effect` ticks. There is no terminal state.

use crate::effect::EffectId;

/// Ticks each effect stays on screen (100 x 50ms = 5s)
pub const DEFAULT_TICKS_PER_EFFECT: u16 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectCycle {
    current: EffectId,
    ticks: u16,
    ticks_per_effect: u16,
}

impl Default for EffectCycle {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_EFFECT)
    }
}

impl EffectCycle {
    /// Start at [`EffectId::SolidRed`] with a zero tick counter
    ///
    /// A zero `ticks_per_effect` is treated as 1.
    pub const fn new(ticks_per_effect: u16) -> Self {
        Self {
            current: EffectId::SolidRed,
            ticks: 0,
            ticks_per_effect: if ticks_per_effect == 0 { 1 } else { ticks_per_effect },
        }
    }

    pub const fn current(&self) -> EffectId {
        self.current
    }

    /// Ticks elapsed since the current effect started
    pub const fn ticks(&self) -> u16 {
        self.ticks
    }

    /// Count one tick
    ///
    /// # Returns
    /// The new effect when this tick completed the current one
    pub fn advance(&mut self) -> Option<EffectId> {
        self.ticks += 1;
        if self.ticks < self.ticks_per_effect {
            return None;
        }
        self.ticks = 0;
        self.current = self.current.next();
        Some(self.current)
    }
}
