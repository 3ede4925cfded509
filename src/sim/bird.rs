//! The player's bird
//!
//! Motion is a single vertical integrator: constant gravity plus flaps that
//! overwrite the velocity. The horizontal position never changes during a run.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// The player's avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Sprite center
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    /// Sprite size
    pub size: Vec2,
    /// Hitbox inset per side as a fraction of the sprite size
    pub inset: Vec2,
    /// Seconds of flight, drives the wing animation
    pub anim_time: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: Vec2, inset: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            size,
            inset,
            anim_time: 0.0,
        }
    }

    /// Replace the vertical velocity (negative = up). Flaps never stack.
    pub fn flap(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }

    /// Integrate one step under gravity
    pub fn tick(&mut self, dt: f32, gravity: f32) {
        self.vel_y += gravity * dt;
        self.pos.y += self.vel_y * dt;
        self.anim_time += dt;
    }

    /// Full sprite bounds
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Collision box: sprite bounds shrunk so grazes don't count
    pub fn hitbox(&self) -> Rect {
        self.bounds().inset_fraction(self.inset.x, self.inset.y)
    }

    /// Render tilt in degrees, nose-up while rising
    pub fn rotation_degrees(&self) -> f32 {
        (self.vel_y * BIRD_TILT_PER_VEL).clamp(BIRD_TILT_MIN, BIRD_TILT_MAX)
    }

    /// Wing frame index (up, mid, down)
    pub fn anim_frame(&self) -> usize {
        (self.anim_time * BIRD_ANIM_FPS) as usize % BIRD_ANIM_FRAMES
    }
}
