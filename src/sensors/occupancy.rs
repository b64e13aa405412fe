//! Seat pressure (occupancy) input.
//!
//! A force-sensitive resistor in a divider under the cushion: the reading
//! *drops* as weight goes on.  The ADC sampling itself happens outside
//! this crate; whoever owns the converter publishes each raw conversion
//! through [`publish_occupancy`], and the control loop picks up the
//! latest value once per tick.
//!
//! Lock-free so the publisher may run from an ISR or another task.

use core::sync::atomic::{AtomicI32, Ordering};

/// Value seen before the first conversion lands: 12-bit full scale,
/// i.e. an empty seat.
pub const UNLOADED_READING: i32 = 4095;

static LATEST_OCCUPANCY: AtomicI32 = AtomicI32::new(UNLOADED_READING);

/// Hand a fresh raw conversion to the control loop.
pub fn publish_occupancy(raw: i32) {
    LATEST_OCCUPANCY.store(raw, Ordering::Release);
}

/// Reader for the shared occupancy value.
#[derive(Debug)]
pub struct OccupancySensor {
    source: &'static AtomicI32,
}

impl Default for OccupancySensor {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancySensor {
    /// Reader bound to the global slot fed by [`publish_occupancy`].
    pub fn new() -> Self {
        Self::with_source(&LATEST_OCCUPANCY)
    }

    /// Reader bound to a caller-owned slot.  Bench rigs and tests use
    /// this to avoid sharing the global.
    pub fn with_source(source: &'static AtomicI32) -> Self {
        Self { source }
    }

    /// Latest published reading, unfiltered.
    pub fn read(&self) -> i32 {
        self.source.load(Ordering::Acquire)
    }
}
