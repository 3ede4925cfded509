//! Platform abstraction layer
//!
//! The simulation never touches devices. A platform supplies:
//! - Input: a device-agnostic flap intent per poll
//! - Rendering: something that draws a `Frame`
//! - Audio: something that plays a `SoundEffect`

pub mod headless;

use crate::audio::SoundEffect;
use crate::view::Frame;

/// Source of player input
pub trait InputSource {
    /// True if a flap (click, tap, space, up) happened since the last poll
    fn poll_flap(&mut self) -> bool;
}

/// Consumer of render snapshots
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Player of sound cues
pub trait AudioSink {
    /// Play `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}
