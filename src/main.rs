//! SocialSeat Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        SimScanner       SerialTelemetrySink   │
//! │  (Sensor+Render+Host)   (Discovery)      (EventSink)           │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              ControlLoop (pure logic)                  │    │
//! │  │  FSM · Proximity · Ramp · Fade · Colour                │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The radio, ADC, LED strip and UART drivers live outside this crate.
//! This binary wires the control loop to the bench adapters and drives
//! them with a repeating sit/stand script, writing the host telemetry
//! and `# ` diagnostic lines to stdout.
#![deny(unused_must_use)]

use core::fmt::Write as _;
use std::time::Duration;

use anyhow::Result;
use log::info;

use socialseat::adapters::device_id;
use socialseat::adapters::hardware::{HardwareAdapter, SimPin};
use socialseat::adapters::scanner::{SimScanner, advertiser};
use socialseat::adapters::serial_sink::SerialTelemetrySink;
use socialseat::adapters::time::MonotonicClock;
use socialseat::app::service::{ControlLoop, start_discovery};
use socialseat::config::SystemConfig;
use socialseat::sensors::SensorHub;
use socialseat::sensors::force::{ActiveLevel, ForceInput};
use socialseat::sensors::occupancy::{OccupancySensor, UNLOADED_READING, publish_occupancy};

// ── Bench script ──────────────────────────────────────────────

/// One sit/stand cycle of the bench script.
const SCRIPT_PERIOD_MS: u64 = 12_000;
const SIT_FROM_MS: u64 = 2_000;
const SIT_UNTIL_MS: u64 = 8_000;
/// Loaded-seat reading used by the script, well under the threshold.
const SEATED_READING: i32 = 40;

/// Occupancy the script wants at `now_ms`.
fn scripted_occupancy(now_ms: u64) -> i32 {
    let t = now_ms % SCRIPT_PERIOD_MS;
    if (SIT_FROM_MS..SIT_UNTIL_MS).contains(&t) {
        SEATED_READING
    } else {
        UNLOADED_READING
    }
}

/// Host frame carrying a slow triangle wave on both channels.
fn scripted_audio_frame(now_ms: u64) -> heapless::String<32> {
    let phase = (now_ms / 10 % 2048) as i32;
    let level = if phase < 1024 { phase } else { 2047 - phase };
    let mut frame = heapless::String::new();
    // "0,1023,1023;" is 12 bytes.
    let _ = write!(frame, "0,{},{};", level, 1023 - level);
    frame
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(feature = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("╔══════════════════════════════════════╗");
    info!("║  SocialSeat v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();
    let clock = MonotonicClock::new();

    // ── Device identity ────────────────────────────────────
    let mac = device_id::read_mac();
    let own_name = device_id::advertised_name(&config.peer_name_prefix, &mac);
    info!("Advertising as {}", own_name);

    let mut sink = SerialTelemetrySink::new(std::io::stdout());

    // ── 2. Discovery ──────────────────────────────────────────
    let mut scanner = SimScanner::new(vec![
        advertiser(Some("SocialSeat-1A2B3C"), "24:0a:c4:1a:2b:3c", -62),
        advertiser(Some("Headphones"), "f0:99:b6:00:11:22", -48),
        advertiser(Some("SocialSeat-FARAWAY"), "24:0a:c4:99:88:77", -95),
    ]);
    if start_discovery(&mut scanner, &mut sink).is_err() {
        // The reason has already gone out on the host link.
        loop {
            std::thread::sleep(Duration::from_secs(1));
        }
    }

    // ── 3. Local peripherals ──────────────────────────────────
    let force_pin = SimPin::new(false);
    let mut hw = HardwareAdapter::new(SensorHub::new(
        OccupancySensor::new(),
        ForceInput::new(force_pin, ActiveLevel::High),
    ));

    // ── 4. Control loop ───────────────────────────────────────
    let tick = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    let mut app = ControlLoop::new(config);
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    loop {
        std::thread::sleep(tick);
        let now_ms = clock.uptime_ms();

        publish_occupancy(scripted_occupancy(now_ms));
        hw.receive_host_bytes(scripted_audio_frame(now_ms).as_bytes());

        app.tick(now_ms, &mut hw, &mut scanner, &mut sink);
    }
}
