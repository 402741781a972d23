// File: crates/chart-core/src/ticks.rs
// Summary: Time-axis ticks (one per reading) and their MM:SS labels.

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::scale::TimeScale;
use crate::series::Reading;

/// Label used when a reading's timestamp cannot be parsed.
pub const INVALID_TIME_LABEL: &str = "--:--";

#[derive(Clone, Debug, PartialEq)]
pub struct TimeTick {
    pub index: usize,
    /// Horizontal center of the label.
    pub x: f64,
    /// Text baseline.
    pub y: f64,
    pub label: String,
}

/// Minutes and seconds of `t`, zero padded.
pub fn format_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}", t.minute(), t.second())
}

/// Tick label for a reading, in the local time zone.
pub fn tick_label(reading: &Reading) -> String {
    tick_label_in(reading, &Local)
}

pub fn tick_label_in<Tz: TimeZone>(reading: &Reading, tz: &Tz) -> String {
    match reading.timestamp() {
        Some(t) => format_time(&t.with_timezone(tz)),
        None => INVALID_TIME_LABEL.to_string(),
    }
}

/// One tick per reading, including readings the path skips.
pub fn time_ticks(readings: &[Reading], scale: &TimeScale, baseline_y: f64) -> Vec<TimeTick> {
    readings
        .iter()
        .enumerate()
        .map(|(index, r)| TimeTick { index, x: scale.tick_px(index), y: baseline_y, label: tick_label(r) })
        .collect()
}
