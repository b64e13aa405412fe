//! Seat state → two-channel HSB colour.
//!
//! | activity | channel 0 hue | channel 1 hue |
//! |----------|---------------|---------------|
//! | yes      | 0° red        | 30° orange    |
//! | no       | 100° green    | 120° green    |
//!
//! Saturation is always full.  Occupied seats follow the host's audio
//! levels per channel; every other state shows the idle fade on both.

use crate::fsm::StateId;

/// Number of independently coloured LED channels.
pub const CHANNELS: usize = 2;

/// Hue/saturation/brightness, hue as a fraction of a full turn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

pub type ColourOutput = [Hsb; CHANNELS];

const HUE_ACTIVE: [f32; CHANNELS] = [0.0, 30.0 / 360.0];
const HUE_IDLE: [f32; CHANNELS] = [100.0 / 360.0, 120.0 / 360.0];

/// Compute both channel colours for this tick.
///
/// Audio-driven brightness is `sample / audio_full_scale` with no clamp:
/// a sample at or above full scale (or negative) passes straight through
/// to the render adapter.
pub fn map_colours(
    activity: bool,
    state: StateId,
    idle_brightness: f32,
    audio_levels: [i16; CHANNELS],
    audio_full_scale: f32,
) -> ColourOutput {
    let hues = if activity { HUE_ACTIVE } else { HUE_IDLE };
    core::array::from_fn(|ch| Hsb {
        hue: hues[ch],
        saturation: 1.0,
        brightness: if state == StateId::Occupied {
            f32::from(audio_levels[ch]) / audio_full_scale
        } else {
            idle_brightness
        },
    })
}
