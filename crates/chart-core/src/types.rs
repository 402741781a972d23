// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants and the validated chart size.

use crate::error::ChartError;

/// Default widget width in pixels.
pub const WIDTH: u32 = 900;
/// Default plot height in pixels (excludes the time label band).
pub const HEIGHT: u32 = 200;

/// Horizontal distance between consecutive readings.
pub const TIME_WIDTH: f64 = 120.0;
/// Width of the fixed status label gutter.
pub const LABEL_WIDTH: f64 = 80.0;
/// Gap between the plot area and the time label band.
pub const TIME_LABEL_MARGIN: f64 = 5.0;
/// Offset of a time tick from its reading's slot.
pub const PADDING_LEFT: f64 = 20.0;
/// Distance from the scroll end still considered "at the end".
pub const END_THRESHOLD: f64 = 10.0;
/// Extra height of the widget below the plot (time labels and padding).
pub const FOOTER_HEIGHT: f64 = 40.0;

/// Pixel dimensions of the chart widget.
/// Contract: both sides are positive and the width leaves room next to the gutter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSize {
    width: u32,
    height: u32,
}

impl ChartSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ChartError> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidSize { width, height, reason: "dimensions must be positive" });
        }
        if f64::from(width) <= LABEL_WIDTH {
            return Err(ChartError::InvalidSize { width, height, reason: "width must exceed the label gutter" });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 { self.width }
    pub const fn height(&self) -> u32 { self.height }

    /// Visible width of the scrollable region.
    pub fn client_width(&self) -> f64 { f64::from(self.width) - LABEL_WIDTH }

    /// Height of each SVG layer: plot plus the time label band.
    pub fn svg_height(&self) -> f64 { f64::from(self.height) + TIME_LABEL_MARGIN + 20.0 }

    /// Full widget height.
    pub fn widget_height(&self) -> f64 { f64::from(self.height) + FOOTER_HEIGHT }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}
