//! Sensor subsystem — individual inputs and the aggregating [`SensorHub`].
//!
//! The hub owns every input and produces a [`SensorSample`] each tick
//! that the control loop writes into `FsmContext.sensors`.

pub mod force;
pub mod occupancy;

use embedded_hal::digital::InputPin;

use crate::fsm::context::SensorSample;
use force::ForceInput;
use occupancy::OccupancySensor;

/// Aggregates the seat inputs and produces a unified sample.
pub struct SensorHub<P> {
    pub occupancy: OccupancySensor,
    pub force: ForceInput<P>,
}

impl<P: InputPin> SensorHub<P> {
    pub fn new(occupancy: OccupancySensor, force: ForceInput<P>) -> Self {
        Self { occupancy, force }
    }

    /// Sample both inputs.  Raw values, no smoothing, no history.
    pub fn read(&mut self) -> SensorSample {
        SensorSample {
            occupancy_signal: self.occupancy.read(),
            force_signal: self.force.is_asserted(),
        }
    }
}
