//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the seat's behaviour: the per-tick control loop
//! tying occupancy, peer proximity, volume and light together.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
