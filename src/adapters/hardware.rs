//! Hardware adapter — bridges the seat peripherals to domain port traits.
//!
//! Owns the [`SensorHub`], the latest LED channel colours and the host
//! link decoder, exposing them through [`SensorPort`], [`RenderPort`] and
//! [`HostPort`].  The LED strip driver and the UART are external
//! collaborators: whatever owns them pushes received bytes in through
//! [`HardwareAdapter::receive_host_bytes`] and pulls colours out through
//! [`HardwareAdapter::channels`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin};
use log::debug;

use crate::app::ports::{HostPort, RenderPort, SensorPort};
use crate::fsm::context::SensorSample;
use crate::host::{CommandDecoder, HostCommand};
use crate::lighting::{ColourOutput, Hsb};
use crate::sensors::SensorHub;

/// Concrete adapter that combines the seat peripherals behind port traits.
pub struct HardwareAdapter<P> {
    sensor_hub: SensorHub<P>,
    channels: ColourOutput,
    decoder: CommandDecoder,
    pending: Option<HostCommand>,
}

impl<P: InputPin> HardwareAdapter<P> {
    pub fn new(sensor_hub: SensorHub<P>) -> Self {
        Self {
            sensor_hub,
            channels: ColourOutput::default(),
            decoder: CommandDecoder::new(),
            pending: None,
        }
    }

    /// Feed raw bytes from the host link.  Complete, recognised commands
    /// overwrite any still-unpolled one.
    pub fn receive_host_bytes(&mut self, bytes: &[u8]) {
        let pending = &mut self.pending;
        self.decoder.feed(bytes, |frame| match HostCommand::from_frame(&frame) {
            Some(cmd) => *pending = Some(cmd),
            None => debug!("host: ignoring frame id {}", frame.id),
        });
    }

    /// Colours most recently written to each channel.
    pub fn channels(&self) -> ColourOutput {
        self.channels
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P: InputPin> SensorPort for HardwareAdapter<P> {
    fn read_sample(&mut self) -> SensorSample {
        self.sensor_hub.read()
    }
}

// ── RenderPort implementation ─────────────────────────────────

impl<P> RenderPort for HardwareAdapter<P> {
    fn set_channel(&mut self, channel: usize, colour: Hsb) {
        if let Some(slot) = self.channels.get_mut(channel) {
            *slot = colour;
        }
    }
}

// ── HostPort implementation ───────────────────────────────────

impl<P> HostPort for HardwareAdapter<P> {
    fn poll_command(&mut self) -> Option<HostCommand> {
        self.pending.take()
    }
}

// ── Simulated input pin ───────────────────────────────────────

/// Input pin backed by a shared flag.  Clones observe the same level,
/// so a bench script can keep one handle and hand the other to the hub.
#[derive(Debug, Clone, Default)]
pub struct SimPin {
    level: Arc<AtomicBool>,
}

impl SimPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Arc::new(AtomicBool::new(high)),
        }
    }

    pub fn set_high(&self) {
        self.level.store(true, Ordering::Relaxed);
    }

    pub fn set_low(&self) {
        self.level.store(false, Ordering::Relaxed);
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level.load(Ordering::Relaxed))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level.load(Ordering::Relaxed))
    }
}
