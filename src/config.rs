//! System configuration parameters
//!
//! All tunable parameters for the SocialSeat core.  There is no runtime
//! configuration source: every value is a compile-time constant carried
//! by [`SystemConfig::default`].

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Occupancy ---
    /// Analog occupancy reading below which the seat counts as occupied
    /// (and above which it counts as vacated).  Same value both ways.
    pub occupancy_threshold: i32,
    /// Target volume while occupied (0-100).
    pub occupied_volume: u8,
    /// Target volume while dormant (0-100).
    pub dormant_volume: u8,

    // --- Proximity ---
    /// Signal strength a peer must exceed to count as nearby (dBm).
    pub rssi_floor_dbm: i16,
    /// Expected signal strength at one metre (dBm).
    pub reference_power_dbm: f32,
    /// Log-distance path-loss exponent (2.0 = free space).
    pub path_loss_exponent: f32,
    /// Name prefix shared by every seat.
    pub peer_name_prefix: heapless::String<16>,
    /// Exact name of the bench debug beacon.
    pub debug_peer_name: heapless::String<16>,

    // --- Idle animation ---
    /// Lowest phase value of the breathing fade.
    pub fade_lower: i32,
    /// Highest phase value of the breathing fade.
    pub fade_upper: i32,
    /// Phase advance per tick.
    pub fade_step: i32,
    /// Divisor turning a phase into a brightness.
    pub fade_normalization: f32,

    // --- Audio ---
    /// Full-scale value of the host audio-level samples.
    pub audio_full_scale: f32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Peer scan interval (milliseconds)
    pub scan_interval_ms: u32,
    /// Telemetry line interval (milliseconds)
    pub telemetry_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Occupancy
            occupancy_threshold: 100,
            occupied_volume: 100,
            dormant_volume: 0,

            // Proximity
            rssi_floor_dbm: -90,
            reference_power_dbm: -59.0,
            path_loss_exponent: 2.0,
            peer_name_prefix: fixed_str("SocialSeat"),
            debug_peer_name: fixed_str("SeatDebug"),

            // Idle animation
            fade_lower: 100,
            fade_upper: 600,
            fade_step: 2,
            fade_normalization: 1000.0,

            // Audio
            audio_full_scale: 1024.0,

            // Timing
            control_loop_interval_ms: 20, // 50 Hz
            scan_interval_ms: 5000,
            telemetry_interval_ms: 40,
        }
    }
}

fn fixed_str(s: &str) -> heapless::String<16> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
