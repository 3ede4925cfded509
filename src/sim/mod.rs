//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by `GameState`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod gap;
pub mod pipe;
pub mod rect;
pub mod state;
pub mod stream;
pub mod tick;

pub use bird::Bird;
pub use collision::{CollisionKind, check_world, hits_ceiling, hits_ground};
pub use gap::GapRange;
pub use pipe::{PipePair, PipeShape};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use stream::PipeStream;
pub use tick::{TickInput, autopilot_wants_flap, tick};
