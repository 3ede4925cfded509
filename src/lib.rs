//! Flapper - A side-scrolling flap-through-the-gaps arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipe stream, collisions, game state)
//! - `session`: Fixed-timestep driver decoupling simulation from frame rate
//! - `platform`: Input/render/audio collaborator traits and headless implementations
//! - `view`: Render snapshot handed to external renderers
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod platform;
pub mod records;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod view;

pub use records::SessionRecord;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Largest frame delta fed into the accumulator (stalls, debugger breaks)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// A pipe pair is retired once its trailing edge is left of this x
    pub const OFFSCREEN_MARGIN: f32 = -50.0;

    /// Bird rotation per unit of vertical velocity (degrees)
    pub const BIRD_TILT_PER_VEL: f32 = 0.08;
    /// Nose-up limit (degrees)
    pub const BIRD_TILT_MIN: f32 = -30.0;
    /// Nose-down limit (degrees)
    pub const BIRD_TILT_MAX: f32 = 70.0;
    /// Wing animation rate (frames per second)
    pub const BIRD_ANIM_FPS: f32 = 12.0;
    /// Number of wing animation frames
    pub const BIRD_ANIM_FRAMES: usize = 3;
}
