// File: crates/chart-core/src/grid.rs
// Summary: Horizontal grid lines at the fixed status offsets.

use crate::axis::{StatusAxis, StatusLevel};
use crate::geometry::{Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub level: StatusLevel,
    pub segment: Segment,
}

/// One line per status level, spanning `[0, total_width]`.
pub fn grid_lines(axis: &StatusAxis, total_width: f64) -> Vec<GridLine> {
    axis.levels()
        .map(|(level, y)| GridLine {
            level,
            segment: Segment { from: Point::new(0.0, y), to: Point::new(total_width, y) },
        })
        .collect()
}
