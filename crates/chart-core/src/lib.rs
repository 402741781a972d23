// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the reading model, scene derivation, scroll state and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod view;

pub use axis::{StatusAxis, StatusLevel};
pub use chart::{RealtimeChart, RenderOptions};
pub use error::ChartError;
pub use path::{PathCommand, SmoothPath};
pub use scene::{Scene, StatusLabel};
pub use series::{Reading, Readings, Snapshot};
pub use text::TextShaper;
pub use theme::Theme;
pub use ticks::{format_time, TimeTick};
pub use types::ChartSize;
pub use view::{Follow, ScrollView, SmoothScroll};
