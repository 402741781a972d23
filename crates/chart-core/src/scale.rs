// File: crates/chart-core/src/scale.rs
// Summary: Horizontal time scale: reading index to pixel column inside the scroll region.

use std::ops::Range;

use crate::types::{PADDING_LEFT, TIME_WIDTH};

/// Index-based time scale. Readings are evenly spaced regardless of their timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f64,
    pub spacing: f64,
}

impl TimeScale {
    pub fn new(left_px: f64, spacing: f64) -> Self {
        Self { left_px, spacing: spacing.max(0.01) }
    }

    /// x of a plotted point.
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.spacing
    }

    /// x of the time tick label for the reading at `index`.
    #[inline]
    pub fn tick_px(&self, index: usize) -> f64 {
        self.to_px(index) + PADDING_LEFT
    }

    /// Drawable width needed for `count` readings, never narrower than `min_width`.
    pub fn content_width(&self, count: usize, min_width: f64) -> f64 {
        min_width.max(count.max(1) as f64 * self.spacing)
    }

    /// Reading indices whose slots intersect `[left, left + width]`, padded by one slot each side.
    pub fn visible_range(&self, left: f64, width: f64, count: usize) -> Range<usize> {
        let first = ((left - self.left_px) / self.spacing).floor() - 1.0;
        let last = ((left + width - self.left_px) / self.spacing).ceil() + 1.0;
        let start = first.max(0.0) as usize;
        let end = (last.max(0.0) as usize).min(count);
        start.min(end)..end
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(0.0, TIME_WIDTH)
    }
}
