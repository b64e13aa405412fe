//! Ambient light: idle breathing animation and state → colour mapping.
//!
//! The core only produces abstract HSB per channel.  Turning that into
//! LED protocol bits is the render adapter's job.

pub mod animator;
pub mod colour;

pub use animator::IdleAnimator;
pub use colour::{ColourOutput, Hsb, map_colours};
