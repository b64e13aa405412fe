//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: the latest sensor sample, the target volume the handlers
//! select and the configuration.

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Sensor sample (read-only to state handlers; written by the control loop)
// ---------------------------------------------------------------------------

/// One tick's worth of raw sensor input.  No history, no smoothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSample {
    /// Digitised analog occupancy reading.  Lower means more pressure.
    pub occupancy_signal: i32,
    /// Digital "force active" input.
    pub force_signal: bool,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Sensor data --
    /// Latest sensor sample.  Updated before each FSM tick.
    pub sensors: SensorSample,

    // -- Outputs --
    /// Volume the ramp converges toward (0-100).
    pub target_volume: u8,

    // -- Configuration --
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            sensors: SensorSample::default(),
            target_volume: config.dormant_volume,
            config,
        }
    }

    /// `true` when the occupancy reading is below the threshold.
    pub fn seat_pressed(&self) -> bool {
        self.sensors.occupancy_signal < self.config.occupancy_threshold
    }

    /// `true` when the occupancy reading is above the threshold.
    ///
    /// A reading exactly on the threshold is neither pressed nor released.
    pub fn seat_released(&self) -> bool {
        self.sensors.occupancy_signal > self.config.occupancy_threshold
    }
}
