//! Host link — the serial connection to the audio computer.
//!
//! Inbound: audio-level sample pairs.  Outbound: the telemetry line.
//! The byte transport itself is an adapter concern; this module only
//! knows the framing and the command vocabulary.

pub mod codec;

pub use codec::{CommandDecoder, HostFrame, encode_telemetry};

/// Command id carrying the two audio-level samples.
pub const CMD_AUDIO_LEVELS: u16 = 0;

/// Commands the control loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Replace both audio-level samples at once.
    SetAudioLevels([i16; 2]),
}

impl HostCommand {
    /// Interpret a decoded frame.  Unknown ids yield `None` and are
    /// meant to be dropped silently.
    pub fn from_frame(frame: &HostFrame) -> Option<Self> {
        match frame.id {
            CMD_AUDIO_LEVELS => Some(Self::SetAudioLevels(frame.args)),
            _ => None,
        }
    }
}
