//! Scripted BLE discovery adapter.
//!
//! Stands in for the radio on the bench and in tests: every scan window
//! replays the same list of advertisers.  The list can be swapped at any
//! time to simulate peers walking in and out of range.

use log::{info, warn};

use crate::app::ports::DiscoveryPort;
use crate::error::CommsError;
use crate::proximity::{DiscoveredDevice, MAX_NAME_LEN};

pub struct SimScanner {
    devices: Vec<DiscoveredDevice>,
    cursor: usize,
    fail_begin: bool,
    started: bool,
    scans: u32,
}

impl Default for SimScanner {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SimScanner {
    pub fn new(devices: Vec<DiscoveredDevice>) -> Self {
        Self {
            devices,
            cursor: 0,
            fail_begin: false,
            started: false,
            scans: 0,
        }
    }

    /// A scanner whose radio refuses to come up.
    pub fn failing() -> Self {
        Self {
            fail_begin: true,
            ..Self::default()
        }
    }

    /// Replace the advertisers seen from the next window on.
    pub fn set_devices(&mut self, devices: Vec<DiscoveredDevice>) {
        self.devices = devices;
        self.cursor = self.devices.len();
    }

    /// Scan windows started so far.
    pub fn scans(&self) -> u32 {
        self.scans
    }
}

impl DiscoveryPort for SimScanner {
    fn begin(&mut self) -> Result<(), CommsError> {
        if self.fail_begin {
            warn!("sim scanner: radio init refused");
            return Err(CommsError::BleInitFailed);
        }
        self.started = true;
        info!("sim scanner: {} scripted advertiser(s)", self.devices.len());
        Ok(())
    }

    fn start_scan(&mut self) {
        if !self.started {
            warn!("sim scanner: scan requested before begin");
        }
        self.cursor = 0;
        self.scans += 1;
    }

    fn next_device(&mut self) -> Option<DiscoveredDevice> {
        let device = self.devices.get(self.cursor).cloned();
        if device.is_some() {
            self.cursor += 1;
        }
        device
    }
}

/// Build an advertiser record.  Strings longer than the fixed capacity
/// are truncated.
pub fn advertiser(name: Option<&str>, address: &str, rssi: i16) -> DiscoveredDevice {
    DiscoveredDevice {
        name: name.map(truncate::<MAX_NAME_LEN>),
        local_name: None,
        address: truncate::<17>(address),
        rssi,
    }
}

fn truncate<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
