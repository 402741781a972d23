// File: crates/chart-core/src/scene.rs
// Summary: Pure derivation of one chart frame from the readings and the widget size.

use crate::axis::{StatusAxis, StatusLevel};
use crate::grid::{grid_lines, GridLine};
use crate::path::SmoothPath;
use crate::scale::TimeScale;
use crate::series::Reading;
use crate::ticks::{time_ticks, TimeTick};
use crate::types::{ChartSize, TIME_LABEL_MARGIN, TIME_WIDTH};

/// x of the gutter labels.
pub const STATUS_LABEL_X: f64 = 10.0;

/// A label in the fixed gutter, vertically centered on `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusLabel {
    pub level: StatusLevel,
    pub x: f64,
    pub y: f64,
}

impl StatusLabel {
    pub fn text(&self) -> &'static str { self.level.title() }
}

/// Everything needed to draw one frame. Scroll-region coordinates start at the
/// left edge of the scroll content, gutter coordinates at the widget's left edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: ChartSize,
    pub axis: StatusAxis,
    pub scale: TimeScale,
    pub total_width: f64,
    pub svg_height: f64,
    pub gutter: Vec<StatusLabel>,
    pub grid: Vec<GridLine>,
    pub ticks: Vec<TimeTick>,
    pub path: SmoothPath,
}

impl Scene {
    pub fn build(readings: &[Reading], size: ChartSize) -> Self {
        let height = f64::from(size.height());
        let axis = StatusAxis::new(height);
        let scale = TimeScale::new(0.0, TIME_WIDTH);
        let total_width = scale.content_width(readings.len(), f64::from(size.width()));
        let gutter = axis
            .levels()
            .map(|(level, y)| StatusLabel { level, x: STATUS_LABEL_X, y })
            .collect();

        Self {
            size,
            axis,
            scale,
            total_width,
            svg_height: size.svg_height(),
            gutter,
            grid: grid_lines(&axis, total_width),
            ticks: time_ticks(readings, &scale, height + TIME_LABEL_MARGIN + 15.0),
            path: SmoothPath::build(readings, &axis, &scale),
        }
    }

    pub fn empty(size: ChartSize) -> Self {
        Self::build(&[], size)
    }
}
