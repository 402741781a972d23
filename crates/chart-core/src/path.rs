// File: crates/chart-core/src/path.rs
// Summary: Smoothed status path: one cubic segment between consecutive valid readings.

use std::fmt;

use crate::axis::StatusAxis;
use crate::geometry::Point;
use crate::scale::TimeScale;
use crate::series::Reading;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Path through the plotted readings. Empty when fewer than two readings carry a status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothPath {
    commands: Vec<PathCommand>,
}

impl SmoothPath {
    /// Build the path for `readings`. Readings with an empty label are skipped and
    /// do not consume an x slot; unknown labels are plotted on the `low` line.
    pub fn build(readings: &[Reading], axis: &StatusAxis, scale: &TimeScale) -> Self {
        let points: Vec<Point> = readings
            .iter()
            .filter(|r| r.has_status())
            .enumerate()
            .map(|(i, r)| Point::new(scale.to_px(i), axis.y_for_label(&r.y)))
            .collect();
        Self::through(&points, scale.spacing)
    }

    /// Connect `points` in order; control points sit a third of `spacing` inside each
    /// endpoint at the endpoint's height.
    pub fn through(points: &[Point], spacing: f64) -> Self {
        if points.len() < 2 {
            return Self::default();
        }
        let third = spacing / 3.0;
        let mut commands = Vec::with_capacity(points.len());
        commands.push(PathCommand::MoveTo(points[0]));
        for pair in points.windows(2) {
            let (prev, p) = (pair[0], pair[1]);
            commands.push(PathCommand::CubicTo {
                c1: Point::new(prev.x + third, prev.y),
                c2: Point::new(p.x - third, p.y),
                to: p,
            });
        }
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::CubicTo { .. })).count()
    }

    /// SVG path data, e.g. `M 0 180 C 40 180, 80 20, 120 20`.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SmoothPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::CubicTo { c1, c2, to } => write!(
                    f,
                    " C {} {}, {} {}, {} {}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                )?,
            }
        }
        Ok(())
    }
}
