//! The live pipe stream
//!
//! Pairs are kept in spawn order, oldest at the front. All pairs scroll at the
//! same speed, so spawn order is also left-to-right order and the only pair
//! that can ever leave the screen is the front one.

use std::collections::VecDeque;

use rand::Rng;

use super::gap::GapRange;
use super::pipe::{PipePair, PipeShape};
use super::rect::Rect;
use crate::tuning::Tuning;

/// Spawn/retire bookkeeping for the pipe pairs of a run
#[derive(Debug, Clone)]
pub struct PipeStream {
    pairs: VecDeque<PipePair>,
    shape: PipeShape,
    gap_range: GapRange,
    /// Distance between a trailing edge and the next pair
    spacing: f32,
    /// Seconds between spawns
    spawn_interval: f32,
    /// Seconds since the last spawn
    spawn_timer: f32,
    /// Right edge of the viewport
    viewport_width: f32,
    /// Offset of the first seeded pair past the viewport
    lead_in: f32,
    initial_count: usize,
    /// Pairs spawned by the timer since the last seed
    spawned: u64,
}

impl PipeStream {
    /// Empty stream; call [`PipeStream::seed`] before playing
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pairs: VecDeque::with_capacity(tuning.initial_pipes + 4),
            shape: PipeShape::from_tuning(tuning),
            gap_range: GapRange::from_tuning(tuning),
            spacing: tuning.pipe_spacing,
            spawn_interval: tuning.spawn_interval,
            spawn_timer: 0.0,
            viewport_width: tuning.screen_width,
            lead_in: tuning.lead_in,
            initial_count: tuning.initial_pipes,
            spawned: 0,
        }
    }

    /// Clear everything and place the initial batch ahead of the viewport
    pub fn seed<R: Rng>(&mut self, rng: &mut R) {
        self.pairs.clear();
        self.spawn_timer = 0.0;
        self.spawned = 0;

        let mut x = self.viewport_width + self.lead_in;
        for _ in 0..self.initial_count {
            self.push_at(x, rng);
            x += self.spacing + self.shape.width;
        }
    }

    /// Scroll every pair left by `speed * dt`
    pub fn advance(&mut self, dt: f32, speed: f32) {
        let dx = -speed * dt;
        for pair in &mut self.pairs {
            pair.tick(dx);
        }
    }

    /// Spawn one pair when the timer reaches the interval; true if one was spawned
    pub fn maybe_spawn<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer < self.spawn_interval {
            return false;
        }

        let x = match self.pairs.back() {
            Some(last) => last.trailing_edge() + self.spacing,
            None => self.viewport_width + self.spacing,
        };
        self.push_at(x, rng);
        self.spawn_timer = 0.0;
        self.spawned += 1;
        true
    }

    /// Drop pairs off the left edge; returns how many were dropped
    pub fn retire_offscreen(&mut self) -> usize {
        let mut retired = 0;
        while self.pairs.front().is_some_and(PipePair::is_offscreen) {
            self.pairs.pop_front();
            retired += 1;
        }
        if retired > 0 {
            log::debug!("Retired {retired} pipe pair(s), {} live", self.pairs.len());
        }
        retired
    }

    /// Count pairs the avatar cleared this tick (each pair at most once)
    pub fn collect_pass_events(&mut self, avatar_x: f32) -> u32 {
        let mut passed = 0;
        for pair in self.pairs.iter_mut().filter(|p| !p.counted) {
            if pair.try_count(avatar_x) {
                passed += 1;
            }
        }
        passed
    }

    /// Check whether any live pair overlaps the hitbox
    pub fn first_hit(&self, hitbox: &Rect) -> Option<&PipePair> {
        self.pairs.iter().find(|p| p.intersects(hitbox))
    }

    /// Live pairs, oldest (left-most) first
    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Anchor range new pairs are drawn from
    pub fn gap_range(&self) -> GapRange {
        self.gap_range
    }

    /// Pairs spawned by the timer since the last seed
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Seconds accumulated towards the next spawn
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    fn push_at<R: Rng>(&mut self, x: f32, rng: &mut R) {
        let anchor = self.gap_range.sample(rng);
        log::debug!("Spawning pipe pair at x={x:.1}, anchor={anchor:.1}");
        self.pairs.push_back(PipePair::new(x, anchor, self.shape));
    }
}
