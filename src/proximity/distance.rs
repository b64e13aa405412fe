//! RSSI → distance estimate using the log-distance path-loss model.
//!
//! `d = 10 ^ ((P_ref - rssi) / (10 * n))`
//!
//! `P_ref` is the RSSI expected at one metre and `n` the path-loss
//! exponent.  Indoors this is a rough figure at best; the proximity gate
//! works on raw RSSI and does not consult it.
//!
//! Radios report RSSI as a signed byte, so inputs are clamped into
//! [`RSSI_MIN_DBM`]..=[`RSSI_MAX_DBM`].  Inside that range the estimate
//! is finite, positive and strictly decreasing; outside it saturates at
//! the boundary value.

use crate::config::SystemConfig;

/// Weakest RSSI the estimator distinguishes.
pub const RSSI_MIN_DBM: i16 = i8::MIN as i16;
/// Strongest RSSI the estimator distinguishes.
pub const RSSI_MAX_DBM: i16 = i8::MAX as i16;

/// Log-distance path-loss estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimator {
    reference_power_dbm: f32,
    path_loss_exponent: f32,
}

impl DistanceEstimator {
    pub fn new(reference_power_dbm: f32, path_loss_exponent: f32) -> Self {
        Self {
            reference_power_dbm,
            path_loss_exponent,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.reference_power_dbm, config.path_loss_exponent)
    }

    /// Estimated distance in metres.
    pub fn estimate_m(&self, rssi: i16) -> f32 {
        let rssi = rssi.clamp(RSSI_MIN_DBM, RSSI_MAX_DBM);
        let exponent = (f64::from(self.reference_power_dbm) - f64::from(rssi))
            / (10.0 * f64::from(self.path_loss_exponent));
        10f64.powf(exponent) as f32
    }
}
