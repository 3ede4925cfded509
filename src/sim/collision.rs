//! Collision detection between the bird and the world
//!
//! The bird can die three ways: clipping a pipe, touching the ground or
//! leaving through the top of the screen. All three use the inset hitbox.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::stream::PipeStream;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Pipe,
    Ground,
    Ceiling,
}

/// Check if the hitbox reached the ground line
#[inline]
pub fn hits_ground(hitbox: &Rect, ground_y: f32) -> bool {
    hitbox.bottom() >= ground_y
}

/// Check if the hitbox left through the top of the screen
#[inline]
pub fn hits_ceiling(hitbox: &Rect) -> bool {
    hitbox.top() <= 0.0
}

/// Check the hitbox against pipes, ground and ceiling, in that order
pub fn check_world(hitbox: &Rect, pipes: &PipeStream, ground_y: f32) -> Option<CollisionKind> {
    if pipes.first_hit(hitbox).is_some() {
        Some(CollisionKind::Pipe)
    } else if hits_ground(hitbox, ground_y) {
        Some(CollisionKind::Ground)
    } else if hits_ceiling(hitbox) {
        Some(CollisionKind::Ceiling)
    } else {
        None
    }
}
