//! Sound cue routing
//!
//! The simulation only reports events; this maps them to the three cues and
//! hands them to whatever `AudioSink` the platform provides.

use serde::{Deserialize, Serialize};

use crate::platform::AudioSink;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Bird flapped
    Wing,
    /// Pipe pair cleared
    Point,
    /// Run ended
    Hit,
}

impl SoundEffect {
    /// Cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Flap => SoundEffect::Wing,
            GameEvent::Scored { .. } => SoundEffect::Point,
            GameEvent::Collision { .. } => SoundEffect::Hit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Wing => "wing",
            SoundEffect::Point => "point",
            SoundEffect::Hit => "hit",
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager configured from player settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play<S: AudioSink + ?Sized>(&self, sink: &mut S, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        sink.play(effect, vol);
    }

    /// Play the cue for every event, in order
    pub fn play_events<S: AudioSink + ?Sized>(&self, sink: &mut S, events: &[GameEvent]) {
        for event in events {
            self.play(sink, SoundEffect::for_event(event));
        }
    }
}
