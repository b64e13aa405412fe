//! Which advertisements count as a nearby seat.

use crate::config::SystemConfig;

use super::PeerObservation;

/// Name-and-RSSI predicate for peers of interest.
#[derive(Debug, Clone)]
pub struct PeerFilter {
    prefix: heapless::String<16>,
    debug_name: heapless::String<16>,
    rssi_floor_dbm: i16,
}

impl PeerFilter {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            prefix: config.peer_name_prefix.clone(),
            debug_name: config.debug_peer_name.clone(),
            rssi_floor_dbm: config.rssi_floor_dbm,
        }
    }

    /// A seat of our class, or the bench debug beacon.  Case-sensitive.
    pub fn is_of_interest(&self, name: &str) -> bool {
        name == self.debug_name.as_str() || name.starts_with(self.prefix.as_str())
    }

    /// Strictly stronger than the floor; a reading on the floor is out.
    pub fn in_range(&self, rssi: i16) -> bool {
        rssi > self.rssi_floor_dbm
    }

    /// Both gates.
    pub fn accepts(&self, obs: &PeerObservation) -> bool {
        self.is_of_interest(&obs.identifier) && self.in_range(obs.signal_strength)
    }
}
