//! Proximity pipeline: scripted advertisers → filter → activity.

use super::mock_hw::{MockHardware, RecordingSink};

use socialseat::adapters::scanner::{SimScanner, advertiser};
use socialseat::app::events::AppEvent;
use socialseat::app::ports::DiscoveryPort;
use socialseat::app::service::ControlLoop;
use socialseat::config::SystemConfig;

const SCAN_MS: u64 = 5_000;

fn scan_once(scanner: &mut SimScanner) -> (ControlLoop, RecordingSink) {
    let mut app = ControlLoop::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    scanner.begin().unwrap();
    app.start(&mut sink);
    app.tick(SCAN_MS, &mut hw, scanner, &mut sink);
    (app, sink)
}

fn sightings(sink: &RecordingSink) -> Vec<String> {
    sink.events
        .iter()
        .filter_map(|e| match e {
            AppEvent::PeerSeen(p) => Some(p.name.as_str().to_owned()),
            _ => None,
        })
        .collect()
}

#[test]
fn only_qualifying_peers_are_counted() {
    let mut scanner = SimScanner::new(vec![
        advertiser(Some("SocialSeat-AAAAAA"), "24:0a:c4:00:00:01", -60),
        advertiser(Some("SocialSeat-BBBBBB"), "24:0a:c4:00:00:02", -90),
        advertiser(Some("SocialSeat-CCCCCC"), "24:0a:c4:00:00:03", -89),
        advertiser(Some("Headphones"), "f0:99:b6:00:11:22", -40),
        advertiser(Some("SeatDebug"), "24:0a:c4:00:00:04", -70),
        advertiser(None, "24:0a:c4:00:00:05", -30),
    ]);
    let (app, sink) = scan_once(&mut scanner);

    assert!(app.activity());
    assert_eq!(sink.scan_results(), [3]);
    assert_eq!(
        sightings(&sink),
        ["SocialSeat-AAAAAA", "SocialSeat-CCCCCC", "SeatDebug"]
    );
}

#[test]
fn no_peers_means_no_activity() {
    let mut scanner = SimScanner::new(vec![advertiser(Some("Phone"), "00:00:00:00:00:01", -30)]);
    let (app, sink) = scan_once(&mut scanner);
    assert!(!app.activity());
    assert_eq!(sink.scan_results(), [0]);
}

#[test]
fn sightings_carry_distance_estimate() {
    let mut scanner = SimScanner::new(vec![advertiser(
        Some("SocialSeat-AAAAAA"),
        "24:0a:c4:00:00:01",
        -59,
    )]);
    let (_app, sink) = scan_once(&mut scanner);
    let d = sink
        .events
        .iter()
        .find_map(|e| match e {
            AppEvent::PeerSeen(p) => Some(p.distance_m),
            _ => None,
        })
        .unwrap();
    assert!((d - 1.0).abs() < 1e-4, "reference power reads as 1 m");
}

#[test]
fn peers_leaving_clear_activity_on_next_scan() {
    let mut scanner = SimScanner::new(vec![advertiser(
        Some("SocialSeat-AAAAAA"),
        "24:0a:c4:00:00:01",
        -60,
    )]);
    let mut app = ControlLoop::new(SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    scanner.begin().unwrap();
    app.start(&mut sink);

    app.tick(SCAN_MS, &mut hw, &mut scanner, &mut sink);
    assert!(app.activity());

    scanner.set_devices(Vec::new());
    app.tick(2 * SCAN_MS, &mut hw, &mut scanner, &mut sink);
    assert!(!app.activity());
    assert_eq!(scanner.scans(), 2);
}
