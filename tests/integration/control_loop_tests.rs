//! Integration tests for the ControlLoop → FSM → ramp → LEDs pipeline.

use super::mock_hw::{MockHardware, MockScanner, RecordingSink, device};

use socialseat::app::events::{AppEvent, TelemetryRecord};
use socialseat::app::service::ControlLoop;
use socialseat::config::SystemConfig;
use socialseat::fsm::StateId;
use socialseat::host::HostCommand;

const TICK_MS: u64 = 20;

fn make_app() -> (ControlLoop, MockHardware, MockScanner, RecordingSink) {
    let mut app = ControlLoop::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, MockHardware::new(), MockScanner::new(), sink)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn start_emits_started_dormant() {
    let (app, _hw, _scanner, sink) = make_app();
    assert!(matches!(sink.events[..], [AppEvent::Started(StateId::Dormant)]));
    assert_eq!(app.state(), StateId::Dormant);
    assert_eq!(app.volume(), 0);
}

// ── Sitting down ──────────────────────────────────────────────

#[test]
fn sitting_ramps_volume_and_reports_on_third_tick() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sit();

    let mut volumes = Vec::new();
    for now in [0, 20, 40] {
        app.tick(now, &mut hw, &mut scanner, &mut sink);
        volumes.push(app.volume());
    }

    assert_eq!(volumes, [1, 2, 3]);
    assert_eq!(app.state(), StateId::Occupied);
    assert_eq!(
        sink.telemetry(),
        [TelemetryRecord {
            activity: false,
            state: StateId::Occupied,
            volume: 3,
        }]
    );
    assert!(sink.events.iter().any(|e| matches!(
        e,
        AppEvent::StateChanged {
            from: StateId::Dormant,
            to: StateId::Occupied
        }
    )));
}

#[test]
fn full_volume_after_one_hundred_ticks() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sit();
    for i in 0..100 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(app.volume(), 100);
    app.tick(100 * TICK_MS, &mut hw, &mut scanner, &mut sink);
    assert_eq!(app.volume(), 100, "ramp holds at target");
}

// ── Standing up ───────────────────────────────────────────────

#[test]
fn standing_ramps_back_down() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sit();
    for i in 0..10 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(app.volume(), 10);

    hw.stand();
    app.tick(10 * TICK_MS, &mut hw, &mut scanner, &mut sink);
    assert_eq!(app.state(), StateId::Dormant);
    assert_eq!(app.target_volume(), 0);
    assert_eq!(app.volume(), 9);

    for i in 11..30 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(app.volume(), 0);
}

#[test]
fn threshold_reading_changes_nothing() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sample.occupancy_signal = SystemConfig::default().occupancy_threshold;
    for i in 0..5 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(app.state(), StateId::Dormant);
    assert_eq!(app.volume(), 0);
}

// ── Lifted ────────────────────────────────────────────────────

#[test]
fn lifted_ignores_occupancy() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    app.force_state(StateId::Lifted, &mut sink);
    hw.sit();
    for i in 0..10 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(app.state(), StateId::Lifted);
    hw.stand();
    app.tick(10 * TICK_MS, &mut hw, &mut scanner, &mut sink);
    assert_eq!(app.state(), StateId::Lifted);
}

// ── Activity ──────────────────────────────────────────────────

#[test]
fn force_input_marks_activity() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sample.force_signal = true;
    app.tick(0, &mut hw, &mut scanner, &mut sink);
    assert!(app.activity());
    hw.sample.force_signal = false;
    app.tick(TICK_MS, &mut hw, &mut scanner, &mut sink);
    assert!(!app.activity());
}

#[test]
fn nearby_peer_marks_activity_after_first_scan() {
    let (mut app, mut hw, _, mut sink) = make_app();
    let mut scanner = MockScanner::with(vec![device("SocialSeat-0001", -60)]);

    app.tick(4_980, &mut hw, &mut scanner, &mut sink);
    assert!(!app.activity(), "no scan before the first interval");
    assert_eq!(scanner.scans, 0);

    app.tick(5_000, &mut hw, &mut scanner, &mut sink);
    assert!(app.activity());
    assert_eq!(scanner.scans, 1);
    assert_eq!(sink.scan_results(), [1]);
}

#[test]
fn activity_latched_until_next_scan() {
    let (mut app, mut hw, _, mut sink) = make_app();
    let mut scanner = MockScanner::with(vec![device("SocialSeat-0001", -60)]);
    app.tick(5_000, &mut hw, &mut scanner, &mut sink);
    assert!(app.activity());

    scanner.devices.clear();
    app.tick(9_980, &mut hw, &mut scanner, &mut sink);
    assert!(app.activity(), "count holds between scans");

    app.tick(10_000, &mut hw, &mut scanner, &mut sink);
    assert!(!app.activity());
}

// ── Colours ───────────────────────────────────────────────────

#[test]
fn dormant_seat_breathes_green() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    app.tick(0, &mut hw, &mut scanner, &mut sink);

    let c0 = hw.channel(0).unwrap();
    let c1 = hw.channel(1).unwrap();
    assert!(approx(c0.hue, 100.0 / 360.0));
    assert!(approx(c1.hue, 120.0 / 360.0));
    assert_eq!(c0.saturation, 1.0);
    assert!(approx(c0.brightness, 0.102));
    assert_eq!(c0.brightness, c1.brightness);
    assert_eq!(app.fade_phase(), 102);
}

#[test]
fn occupied_seat_follows_audio_and_freezes_fade() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    app.tick(0, &mut hw, &mut scanner, &mut sink);
    let phase_before = app.fade_phase();

    hw.sit();
    hw.pending = Some(HostCommand::SetAudioLevels([512, 256]));
    app.tick(TICK_MS, &mut hw, &mut scanner, &mut sink);

    assert_eq!(app.state(), StateId::Occupied);
    assert_eq!(app.fade_phase(), phase_before);
    assert!(approx(hw.channel(0).unwrap().brightness, 0.5));
    assert!(approx(hw.channel(1).unwrap().brightness, 0.25));

    // No new command: the previous levels stay.
    app.tick(2 * TICK_MS, &mut hw, &mut scanner, &mut sink);
    assert_eq!(app.audio_levels(), [512, 256]);
    assert_eq!(app.fade_phase(), phase_before);
}

#[test]
fn activity_switches_to_warm_hues() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    hw.sample.force_signal = true;
    app.tick(0, &mut hw, &mut scanner, &mut sink);
    assert_eq!(hw.channel(0).unwrap().hue, 0.0);
    assert!(approx(hw.channel(1).unwrap().hue, 30.0 / 360.0));
}

#[test]
fn both_channels_rendered_every_tick() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    for i in 0..7 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    assert_eq!(hw.renders.len(), 14);
}

// ── Telemetry cadence ─────────────────────────────────────────

#[test]
fn telemetry_every_forty_ms() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    for i in 0..=10 {
        app.tick(i * TICK_MS, &mut hw, &mut scanner, &mut sink);
    }
    // t = 40, 80, 120, 160, 200
    assert_eq!(sink.telemetry().len(), 5);
}

#[test]
fn irregular_ticks_never_report_early() {
    let (mut app, mut hw, mut scanner, mut sink) = make_app();
    for now in [0, 30, 45, 60, 84, 85, 130] {
        app.tick(now, &mut hw, &mut scanner, &mut sink);
    }
    // Fires at 45 (re-arms), 85 and 130.
    assert_eq!(sink.telemetry().len(), 3);
    assert_eq!(app.tick_count(), 7);
}
