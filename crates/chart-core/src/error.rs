// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible edges of the chart (sizing, rasterizing, output).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size {width}x{height}: {reason}")]
    InvalidSize { width: u32, height: u32, reason: &'static str },

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {0}")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
