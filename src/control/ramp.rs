//! Volume slew limiter.
//!
//! Moves the output volume one unit per control tick toward the target
//! chosen by the state machine.  Converges in exactly
//! `|target - current|` ticks, never overshoots, never oscillates.

/// Upper end of the volume scale.
pub const MAX_VOLUME: u8 = 100;

/// Current output volume, 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeRamp {
    current: u8,
}

impl VolumeRamp {
    pub fn new(initial: u8) -> Self {
        Self {
            current: initial.min(MAX_VOLUME),
        }
    }

    /// Take one step toward `target` (clamped to the volume scale) and
    /// return the new level.
    pub fn step(&mut self, target: u8) -> u8 {
        let target = target.min(MAX_VOLUME);
        if self.current < target {
            self.current += 1;
        } else if self.current > target {
            self.current -= 1;
        }
        self.current
    }

    pub fn current(&self) -> u8 {
        self.current
    }
}
