//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them: write the telemetry line to
//! the host link, log diagnostics to the console, etc.

use core::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::fsm::StateId;
use crate::proximity::{DeviceAddress, DeviceName};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Rate-limited state/activity/volume record for the audio host.
    Telemetry(TelemetryRecord),

    /// A qualifying peer was seen in the current scan window.
    PeerSeen(PeerSighting),

    /// A scan window was drained.
    ScanCompleted { peers_found: u8 },

    /// The state machine moved between states.
    StateChanged { from: StateId, to: StateId },

    /// The control loop has started (carries initial state).
    Started(StateId),

    /// Boot failed and the loop will never run.
    Halted(Error),
}

/// One-line human rendering shared by the console and host-link sinks.
impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Telemetry(t) => write!(
                f,
                "TELEM | state={:?} | activity={} | volume={}%",
                t.state,
                if t.activity { "YES" } else { "no" },
                t.volume,
            ),
            Self::PeerSeen(p) => write!(
                f,
                "PEER  | {} [{}] rssi={}dBm ~{:.2}m",
                p.name, p.address, p.rssi, p.distance_m
            ),
            Self::ScanCompleted { peers_found } => {
                write!(f, "SCAN  | done, peers_found={peers_found}")
            }
            Self::StateChanged { from, to } => write!(f, "STATE | {from:?} -> {to:?}"),
            Self::Started(state) => write!(f, "START | initial_state={state:?}"),
            Self::Halted(e) => write!(f, "HALT  | {e}"),
        }
    }
}

/// What the host is told each telemetry interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetryRecord {
    pub activity: bool,
    #[serde(serialize_with = "serialize_state_code")]
    pub state: StateId,
    pub volume: u8,
}

/// Diagnostic detail for one qualifying peer.  No machine contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerSighting {
    pub name: DeviceName,
    pub address: DeviceAddress,
    pub rssi: i16,
    /// Log-distance estimate; informational only.
    pub distance_m: f32,
}

fn serialize_state_code<S: serde::Serializer>(state: &StateId, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(state.code())
}
