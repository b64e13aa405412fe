//! Idle breathing fade.
//!
//! A triangular oscillator: the phase walks by a fixed step and reflects
//! off both bounds.  Period is `2 * (upper - lower) / |step|` ticks.
//! The control loop freezes it while the seat is occupied.

use crate::config::SystemConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleAnimator {
    phase: i32,
    step: i32,
    lower: i32,
    upper: i32,
    normalization: f32,
}

impl IdleAnimator {
    /// Start at the lower bound, fading up.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_phase(
            config.fade_lower,
            config.fade_step,
            config.fade_lower,
            config.fade_upper,
            config.fade_normalization,
        )
    }

    /// Restart from an arbitrary phase/step pair.  Bounds given in either
    /// order are accepted; the phase is clamped into them.
    pub fn with_phase(phase: i32, step: i32, lower: i32, upper: i32, normalization: f32) -> Self {
        let (lower, upper) = (lower.min(upper), lower.max(upper));
        Self {
            phase: phase.clamp(lower, upper),
            step,
            lower,
            upper,
            normalization,
        }
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.phase = self.phase.saturating_add(self.step).clamp(self.lower, self.upper);
        if self.phase == self.lower || self.phase == self.upper {
            self.step = -self.step;
        }
    }

    pub fn brightness(&self) -> f32 {
        self.phase as f32 / self.normalization
    }

    pub fn phase(&self) -> i32 {
        self.phase
    }

    pub fn step(&self) -> i32 {
        self.step
    }
}
