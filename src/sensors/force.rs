//! "Force active" digital input.
//!
//! A jumper or toggle that makes the seat behave as if a peer were
//! nearby; handy on the bench.  Generic over any `embedded-hal` input
//! pin so the same driver runs on the ESP32 GPIO driver and on a mock.

use embedded_hal::digital::{Error as _, InputPin};
use log::debug;

/// Electrical level that counts as asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct ForceInput<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> ForceInput<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Sample the pin.  No debouncing.  A pin read error counts as
    /// not asserted.
    pub fn is_asserted(&mut self) -> bool {
        let level = match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        };
        match level {
            Ok(asserted) => asserted,
            Err(e) => {
                debug!("force pin read failed: {:?}", e.kind());
                false
            }
        }
    }
}
