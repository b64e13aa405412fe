//! Polling rate limiter.
//!
//! No timers and no callbacks: the control loop asks the gate once per
//! tick whether enough monotonic time has passed.  The reference point
//! starts at zero, so the first opening happens one full interval after
//! boot.

/// Elapsed-time gate over a monotonic millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate {
    interval_ms: u64,
    last_ms: u64,
}

impl IntervalGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: u64::from(interval_ms),
            last_ms: 0,
        }
    }

    /// Returns `true` (and re-arms) when `now_ms - last >= interval`.
    ///
    /// A clock that appears to go backwards never opens the gate.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms >= self.last_ms && now_ms - self.last_ms >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last opening (0 before the first one).
    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }
}
