//! Peer proximity — discovering nearby seats over BLE advertising.
//!
//! ```text
//!  DiscoveryPort ──▶ DiscoveredDevice ──▶ PeerFilter ──▶ ProximityAggregator
//!                                                         (peers_found)
//! ```
//!
//! [`distance`] is a standalone estimator; gating uses the raw RSSI
//! through [`filter`], never the estimated distance.

pub mod aggregator;
pub mod distance;
pub mod filter;

/// Longest device name kept from an advertisement.
pub const MAX_NAME_LEN: usize = 32;

/// Name or identifier as carried in an advertisement.
pub type DeviceName = heapless::String<MAX_NAME_LEN>;

/// `AA:BB:CC:DD:EE:FF`
pub type DeviceAddress = heapless::String<17>;

/// A single device reported by the discovery transport during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredDevice {
    /// GAP device name, when the transport resolved one.
    pub name: Option<DeviceName>,
    /// Complete/shortened local name from the advertising payload.
    pub local_name: Option<DeviceName>,
    /// Bluetooth address; telemetry only.
    pub address: DeviceAddress,
    /// Received signal strength (dBm).
    pub rssi: i16,
}

impl DiscoveredDevice {
    /// Best available label: GAP name, then advertised local name, then
    /// the address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.local_name.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or(self.address.as_str())
    }

    /// Reduce to what the proximity policy looks at.
    pub fn observation(&self) -> PeerObservation {
        let mut identifier = DeviceName::new();
        // display_name() is bounded by MAX_NAME_LEN, so this cannot overflow.
        let _ = identifier.push_str(self.display_name());
        PeerObservation {
            identifier,
            signal_strength: self.rssi,
        }
    }
}

/// `{identifier, signal strength}` pair consumed by the peer filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerObservation {
    pub identifier: DeviceName,
    pub signal_strength: i16,
}
