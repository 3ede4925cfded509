//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be re-tuned from JSON
//! without touching the simulation. All distances are world pixels with
//! y pointing down; times are seconds.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Why a tuning could not be used
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field of the wrong type
    Parse(serde_json::Error),
    /// Parsed, but a value would break the simulation
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "parse error: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Viewport width
    pub screen_width: f32,
    /// Viewport height
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the viewport
    pub ground_height: f32,

    // === Bird ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub flap_impulse: f32,
    /// Sprite size of the bird
    pub bird_size: Vec2,
    /// Bird spawn position as fractions of the viewport
    pub bird_start: Vec2,
    /// Hitbox inset per side as a fraction of sprite width / height
    pub bird_inset: Vec2,

    // === Pipes ===
    /// Scroll speed (px/s)
    pub pipe_speed: f32,
    /// Horizontal distance between a trailing edge and the next pair
    pub pipe_spacing: f32,
    /// Seconds between spawns while playing
    pub spawn_interval: f32,
    /// Pairs placed on every (re)start
    pub initial_pipes: usize,
    /// Distance past the right edge of the viewport for the first pair
    pub lead_in: f32,
    /// Pipe column width
    pub pipe_width: f32,
    /// Pipe column height
    pub pipe_height: f32,
    /// Vertical clearance between upper and lower pipe
    pub gap: f32,
    /// Extra clearance above the gap for the upper pipe
    pub gap_pad: f32,
    /// Minimum distance between the top of the gap and the top of the screen
    pub top_margin: f32,
    /// Minimum distance between the anchor and the ground
    pub bottom_margin: f32,
    /// Half height of the band used when the margins leave no valid range
    pub fallback_half_band: f32,
    /// Horizontal hitbox inset per side as a fraction of the pipe width
    pub pipe_inset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 720.0,
            screen_height: 1000.0,
            ground_height: 100.0,

            gravity: 1500.0,
            flap_impulse: -400.0,
            bird_size: Vec2::new(85.0, 60.0),
            bird_start: Vec2::new(0.28, 0.45),
            bird_inset: Vec2::new(0.12, 0.10),

            pipe_speed: 220.0,
            pipe_spacing: 260.0,
            spawn_interval: 1.35,
            initial_pipes: 3,
            lead_in: 220.0,
            pipe_width: 94.0,
            pipe_height: 576.0,
            gap: 320.0,
            gap_pad: 8.0,
            top_margin: 40.0,
            bottom_margin: 60.0,
            fallback_half_band: 10.0,
            pipe_inset: 0.08,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults.
    /// The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value is one the simulation can run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let scalars = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("bird_size.x", self.bird_size.x),
            ("bird_size.y", self.bird_size.y),
            ("bird_start.x", self.bird_start.x),
            ("bird_start.y", self.bird_start.y),
            ("bird_inset.x", self.bird_inset.x),
            ("bird_inset.y", self.bird_inset.y),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
            ("spawn_interval", self.spawn_interval),
            ("lead_in", self.lead_in),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("gap", self.gap),
            ("gap_pad", self.gap_pad),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("fallback_half_band", self.fallback_half_band),
            ("pipe_inset", self.pipe_inset),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::Invalid(format!("{name} must be finite, got {value}")));
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_size.x", self.bird_size.x),
            ("bird_size.y", self.bird_size.y),
            ("spawn_interval", self.spawn_interval),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::Invalid(format!("{name} must be > 0, got {value}")));
        }

        let non_negative = [
            ("ground_height", self.ground_height),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
            ("gap", self.gap),
            ("gap_pad", self.gap_pad),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("fallback_half_band", self.fallback_half_band),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(TuningError::Invalid(format!("{name} must be >= 0, got {value}")));
        }

        if self.ground_height >= self.screen_height {
            return Err(TuningError::Invalid(format!(
                "ground_height {} leaves no sky in a {} high screen",
                self.ground_height, self.screen_height
            )));
        }

        // Half or more per side would turn the hitbox inside out
        for (name, value) in [("bird_inset.x", self.bird_inset.x), ("bird_inset.y", self.bird_inset.y)] {
            if value <= 0.0 || value >= 0.5 {
                return Err(TuningError::Invalid(format!("{name} must be in (0, 0.5), got {value}")));
            }
        }
        if !(0.0..0.5).contains(&self.pipe_inset) {
            return Err(TuningError::Invalid(format!("pipe_inset must be in [0, 0.5), got {}", self.pipe_inset)));
        }

        Ok(())
    }

    /// Y of the ground line (top of the ground strip)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Bird center at the start of a run
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new(
            self.screen_width * self.bird_start.x,
            self.screen_height * self.bird_start.y,
        )
    }
}
