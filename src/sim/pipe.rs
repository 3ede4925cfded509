//! A pipe pair: one upper and one lower column around a gap
//!
//! Only the left edge and the anchor are stored; both rectangles are derived
//! from them, so the gap can never drift out of shape while scrolling.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::OFFSCREEN_MARGIN;
use crate::tuning::Tuning;

/// Fixed dimensions shared by every pair in a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeShape {
    pub width: f32,
    pub height: f32,
    /// Vertical clearance between the columns
    pub gap: f32,
    /// Extra clearance above the gap
    pub pad: f32,
    /// Horizontal hitbox inset per side as a fraction of the width
    pub inset: f32,
}

impl PipeShape {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            width: tuning.pipe_width,
            height: tuning.pipe_height,
            gap: tuning.gap,
            pad: tuning.gap_pad,
            inset: tuning.pipe_inset,
        }
    }
}

/// One obstacle pair
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge
    pub x: f32,
    /// Top edge of the lower column
    pub anchor: f32,
    pub shape: PipeShape,
    /// Already scored
    pub counted: bool,
}

impl PipePair {
    pub fn new(x: f32, anchor: f32, shape: PipeShape) -> Self {
        Self {
            x,
            anchor,
            shape,
            counted: false,
        }
    }

    /// Scroll horizontally (dx < 0 while playing)
    pub fn tick(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Right-most extent
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.shape.width
    }

    /// Bottom edge of the upper column
    #[inline]
    pub fn upper_bottom(&self) -> f32 {
        self.anchor - self.shape.gap - self.shape.pad
    }

    /// Upper column bounds
    pub fn upper_rect(&self) -> Rect {
        let bottom = self.upper_bottom();
        Rect::new(
            Vec2::new(self.x, bottom - self.shape.height),
            Vec2::new(self.trailing_edge(), bottom),
        )
    }

    /// Lower column bounds
    pub fn lower_rect(&self) -> Rect {
        Rect::from_pos_size(
            Vec2::new(self.x, self.anchor),
            Vec2::new(self.shape.width, self.shape.height),
        )
    }

    /// Past the left edge far enough to drop
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < OFFSCREEN_MARGIN
    }

    /// The trailing edge is left of `avatar_x`
    pub fn has_passed(&self, avatar_x: f32) -> bool {
        self.trailing_edge() < avatar_x
    }

    /// Mark as scored the first time the avatar is past; true only on that call
    pub fn try_count(&mut self, avatar_x: f32) -> bool {
        if self.counted || !self.has_passed(avatar_x) {
            return false;
        }
        self.counted = true;
        true
    }

    /// Check the hitbox against both columns (horizontally inset)
    pub fn intersects(&self, hitbox: &Rect) -> bool {
        let dx = self.shape.width * self.shape.inset;
        let upper = self.upper_rect().inset(dx, 0.0);
        let lower = self.lower_rect().inset(dx, 0.0);
        hitbox.intersects(&upper) || hitbox.intersects(&lower)
    }
}
