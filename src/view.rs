//! Render snapshot
//!
//! Everything an external renderer needs to draw one frame, copied out of
//! the simulation so drawing can never feed back into gameplay.

use serde::Serialize;

use crate::sim::{GamePhase, GameState, PipePair, Rect};

/// Bird as it should be drawn
#[derive(Debug, Clone, Serialize)]
pub struct BirdView {
    /// Sprite bounds (unrotated)
    pub bounds: Rect,
    /// Collision box, for debug overlays
    pub hitbox: Rect,
    /// Tilt in degrees around the sprite center
    pub rotation: f32,
    /// Wing frame (0 = up, 1 = mid, 2 = down)
    pub frame: usize,
}

/// One pipe pair as it should be drawn
#[derive(Debug, Clone, Serialize)]
pub struct PipeView {
    pub upper: Rect,
    pub lower: Rect,
    pub counted: bool,
}

impl From<&PipePair> for PipeView {
    fn from(pair: &PipePair) -> Self {
        Self {
            upper: pair.upper_rect(),
            lower: pair.lower_rect(),
            counted: pair.counted,
        }
    }
}

/// Snapshot of a whole frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u32,
    /// Hidden before the first flap
    pub show_score: bool,
    pub ground_y: f32,
    pub bird: BirdView,
    /// Back to front (left-most first)
    pub pipes: Vec<PipeView>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            show_score: state.phase != GamePhase::Ready,
            ground_y: state.tuning.ground_y(),
            bird: BirdView {
                bounds: state.bird.bounds(),
                hitbox: state.bird.hitbox(),
                rotation: state.bird.rotation_degrees(),
                frame: state.bird.anim_frame(),
            },
            pipes: state.pipes.iter().map(PipeView::from).collect(),
        }
    }
}
