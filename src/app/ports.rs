//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (BLE scanner, sensors, LED driver, host link, event
//! sinks) implement these traits.  The [`ControlLoop`](super::service::ControlLoop)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Apart from [`DiscoveryPort::begin`], every call is infallible from the
//! core's point of view: transient failures are the adapter's problem.

use crate::error::CommsError;
use crate::fsm::context::SensorSample;
use crate::host::HostCommand;
use crate::lighting::Hsb;
use crate::proximity::DiscoveredDevice;

// ───────────────────────────────────────────────────────────────
// Discovery port (driven adapter: BLE radio → domain)
// ───────────────────────────────────────────────────────────────

/// Peer discovery over BLE advertising.
pub trait DiscoveryPort {
    /// Bring the radio up.  Failure here is fatal for the device.
    fn begin(&mut self) -> Result<(), CommsError>;

    /// Start a new scan window, discarding whatever the last one held.
    fn start_scan(&mut self);

    /// Next device observed in the current window; `None` once drained.
    fn next_device(&mut self) -> Option<DiscoveredDevice>;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick.
pub trait SensorPort {
    /// Sample the occupancy and force inputs.  No debouncing.
    fn read_sample(&mut self) -> SensorSample;
}

// ───────────────────────────────────────────────────────────────
// Render port (driven adapter: domain → LED strip)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two light channels.
pub trait RenderPort {
    /// Show `colour` on channel `channel` (0 or 1).
    fn set_channel(&mut self, channel: usize, colour: Hsb);
}

// ───────────────────────────────────────────────────────────────
// Host port (driven adapter: serial link → domain)
// ───────────────────────────────────────────────────────────────

/// Inbound side of the host link.
pub trait HostPort {
    /// Most recent recognised command since the last poll, if any.
    /// Older pending commands are superseded (latest value wins).
    fn poll_command(&mut self) -> Option<HostCommand>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → telemetry / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (host serial line,
/// console log, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
