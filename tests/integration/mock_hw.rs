//! Mock adapters for integration tests.
//!
//! Records every render call and emitted event so tests can assert on the
//! full history without touching a radio, an ADC or an LED strip.

use socialseat::app::events::AppEvent;
use socialseat::app::ports::{DiscoveryPort, EventSink, HostPort, RenderPort, SensorPort};
use socialseat::error::CommsError;
use socialseat::fsm::context::SensorSample;
use socialseat::host::HostCommand;
use socialseat::lighting::Hsb;
use socialseat::proximity::DiscoveredDevice;

/// Occupancy reading for an empty seat.
pub const EMPTY: i32 = 4095;
/// Occupancy reading for a loaded seat.
pub const SEATED: i32 = 50;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub sample: SensorSample,
    pub renders: Vec<(usize, Hsb)>,
    pub pending: Option<HostCommand>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            sample: SensorSample {
                occupancy_signal: EMPTY,
                force_signal: false,
            },
            renders: Vec::new(),
            pending: None,
        }
    }

    pub fn sit(&mut self) {
        self.sample.occupancy_signal = SEATED;
    }

    pub fn stand(&mut self) {
        self.sample.occupancy_signal = EMPTY;
    }

    /// Last colour written to `channel`.
    pub fn channel(&self, channel: usize) -> Option<Hsb> {
        self.renders
            .iter()
            .rev()
            .find_map(|(ch, c)| (*ch == channel).then_some(*c))
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_sample(&mut self) -> SensorSample {
        self.sample
    }
}

impl RenderPort for MockHardware {
    fn set_channel(&mut self, channel: usize, colour: Hsb) {
        self.renders.push((channel, colour));
    }
}

impl HostPort for MockHardware {
    fn poll_command(&mut self) -> Option<HostCommand> {
        self.pending.take()
    }
}

// ── MockScanner ───────────────────────────────────────────────

pub struct MockScanner {
    pub devices: Vec<DiscoveredDevice>,
    pub scans: u32,
    cursor: usize,
}

#[allow(dead_code)]
impl MockScanner {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(devices: Vec<DiscoveredDevice>) -> Self {
        Self {
            devices,
            scans: 0,
            cursor: 0,
        }
    }
}

impl DiscoveryPort for MockScanner {
    fn begin(&mut self) -> Result<(), CommsError> {
        Ok(())
    }

    fn start_scan(&mut self) {
        self.scans += 1;
        self.cursor = 0;
    }

    fn next_device(&mut self) -> Option<DiscoveredDevice> {
        let d = self.devices.get(self.cursor).cloned();
        self.cursor += 1;
        d
    }
}

/// Advertiser with a GAP name.
#[allow(dead_code)]
pub fn device(name: &str, rssi: i16) -> DiscoveredDevice {
    let mut n = socialseat::proximity::DeviceName::new();
    n.push_str(name).unwrap();
    let mut address = socialseat::proximity::DeviceAddress::new();
    address.push_str("24:0a:c4:00:00:01").unwrap();
    DiscoveredDevice {
        name: Some(n),
        local_name: None,
        address,
        rssi,
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn telemetry(&self) -> Vec<socialseat::app::events::TelemetryRecord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    pub fn scan_results(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ScanCompleted { peers_found } => Some(*peers_found),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
