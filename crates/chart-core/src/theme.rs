// File: crates/chart-core/src/theme.rs
// Summary: The chart's fixed dark palette, as Skia colors and CSS hex for SVG output.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub time_label: skia::Color,
    pub status_label: skia::Color,
    pub line_stroke: skia::Color,
    pub grid_width: f32,
    pub line_width: f32,
    pub time_font_size: f32,
    pub status_font_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 0x0F, 0x11, 0x14),
            grid: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            time_label: skia::Color::from_argb(255, 0x9C, 0xA3, 0xAF),
            status_label: skia::Color::from_argb(255, 0x9C, 0xA3, 0xAF),
            line_stroke: skia::Color::from_argb(255, 0xFF, 0xFF, 0xFF),
            grid_width: 1.0,
            line_width: 2.0,
            time_font_size: 12.0,
            status_font_size: 14.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// `#RRGGBB` form of an opaque color.
pub fn css_hex(c: skia::Color) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}
