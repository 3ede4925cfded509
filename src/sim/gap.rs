//! Bounded-random gap placement
//!
//! Each pipe pair is placed by a single draw: the anchor, i.e. the top edge
//! of the lower pipe. The anchor must leave room above it for the gap, the
//! pad and the top margin, and stay clear of the ground by the bottom margin.

use rand::Rng;

use crate::tuning::Tuning;

/// Valid anchor range for one configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRange {
    /// Lowest allowed anchor (highest on screen)
    pub min: f32,
    /// Highest allowed anchor (closest to the ground)
    pub max: f32,
    fallback: bool,
}

impl GapRange {
    /// Compute the anchor range from raw measurements
    ///
    /// When the screen is too short for the configured gap and margins the
    /// range would be inverted; a narrow band of `±half_band` around the
    /// midpoint between the top margin and the ground is used instead. The
    /// same band replaces a range with non-finite ends, so sampling never
    /// sees an unusable range.
    pub fn new(
        ground_y: f32,
        gap: f32,
        pad: f32,
        top_margin: f32,
        bottom_margin: f32,
        half_band: f32,
    ) -> Self {
        let min = gap + pad + top_margin;
        let max = ground_y - bottom_margin;

        if is_sampleable(min, max) {
            return Self {
                min,
                max,
                fallback: false,
            };
        }

        let mid = (ground_y + top_margin) * 0.5;
        log::warn!("Gap range [{min}, {max}] is unusable, using fallback band {mid} ± {half_band}");
        Self::band(mid, half_band)
    }

    /// Fallback band around `mid`, collapsed to a point if it can't be sampled
    fn band(mid: f32, half_band: f32) -> Self {
        let mid = if mid.is_finite() { mid } else { 0.0 };
        let half_band = if half_band.is_finite() { half_band.abs() } else { 0.0 };
        let (min, max) = (mid - half_band, mid + half_band);
        if is_sampleable(min, max) {
            Self {
                min,
                max,
                fallback: true,
            }
        } else {
            Self {
                min: mid,
                max: mid,
                fallback: true,
            }
        }
    }

    /// Anchor range for the given tuning
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.ground_y(),
            tuning.gap,
            tuning.gap_pad,
            tuning.top_margin,
            tuning.bottom_margin,
            tuning.fallback_half_band,
        )
    }

    /// True when the configured margins left no room and the band is in use
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Check if an anchor lies within the range
    pub fn contains(&self, anchor: f32) -> bool {
        anchor >= self.min && anchor <= self.max
    }

    /// Draw an anchor uniformly from the range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Ordered, finite ends with a finite width (NaN fails every check)
fn is_sampleable(min: f32, max: f32) -> bool {
    min <= max && (max - min).is_finite()
}
