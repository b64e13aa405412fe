//! Per-tick control primitives: activity classification, volume ramp
//! and elapsed-time rate limiting.

pub mod activity;
pub mod interval;
pub mod ramp;
