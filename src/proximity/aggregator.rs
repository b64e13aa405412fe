//! Counts qualifying peers once per scan interval.
//!
//! Between scans the last count is held, so activity stays latched for a
//! whole interval after a peer walks away.

use log::info;

use crate::app::events::{AppEvent, PeerSighting};
use crate::app::ports::{DiscoveryPort, EventSink};
use crate::config::SystemConfig;
use crate::control::interval::IntervalGate;

use super::distance::DistanceEstimator;
use super::filter::PeerFilter;

pub struct ProximityAggregator {
    filter: PeerFilter,
    estimator: DistanceEstimator,
    gate: IntervalGate,
    peers_found: u8,
}

impl ProximityAggregator {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            filter: PeerFilter::new(config),
            estimator: DistanceEstimator::from_config(config),
            gate: IntervalGate::new(config.scan_interval_ms),
            peers_found: 0,
        }
    }

    /// Run a scan if the interval has elapsed.  Returns `true` if it did.
    ///
    /// Emits one [`AppEvent::PeerSeen`] per qualifying device, then an
    /// [`AppEvent::ScanCompleted`] with the window's count.
    pub fn refresh(
        &mut self,
        now_ms: u64,
        scanner: &mut impl DiscoveryPort,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.gate.ready(now_ms) {
            return false;
        }

        self.peers_found = 0;
        scanner.start_scan();

        while let Some(device) = scanner.next_device() {
            let obs = device.observation();
            if !self.filter.accepts(&obs) {
                continue;
            }
            self.peers_found = self.peers_found.saturating_add(1);
            sink.emit(&AppEvent::PeerSeen(PeerSighting {
                name: obs.identifier,
                address: device.address,
                rssi: obs.signal_strength,
                distance_m: self.estimator.estimate_m(obs.signal_strength),
            }));
        }

        info!("Scan complete: {} peer(s) nearby", self.peers_found);
        sink.emit(&AppEvent::ScanCompleted {
            peers_found: self.peers_found,
        });
        true
    }

    /// Qualifying peers counted by the most recent scan.
    pub fn peers_found(&self) -> u8 {
        self.peers_found
    }

    pub fn peers_present(&self) -> bool {
        self.peers_found > 0
    }
}
