// File: crates/chart-core/src/series.rs
// Summary: Reading model and the append-only reading sequence.
// Notes:
// - `y` stays a raw string so unknown labels survive round trips; the axis
//   decides how they are plotted.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::axis::StatusLevel;

/// One timestamped status sample. Serializes as `{"time": "...", "y": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// ISO-8601 timestamp.
    pub time: String,
    /// Status label; normally one of `low`, `medium`, `high`.
    pub y: String,
}

impl Reading {
    pub fn new(time: DateTime<Utc>, level: StatusLevel) -> Self {
        Self { time: time.to_rfc3339_opts(SecondsFormat::Millis, true), y: level.as_str().to_string() }
    }

    pub fn from_raw(time: impl Into<String>, y: impl Into<String>) -> Self {
        Self { time: time.into(), y: y.into() }
    }

    /// Parsed timestamp. Accepts RFC 3339, ISO-8601 offsets without a colon
    /// (`+0000`), and offset-less stamps, which are read as local time.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        let s = self.time.trim();
        if let Ok(t) = DateTime::parse_from_rfc3339(s) {
            return Some(t);
        }
        if let Ok(t) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(t);
        }
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        Local.from_local_datetime(&naive).earliest().map(|t| t.fixed_offset())
    }

    pub fn status(&self) -> Option<StatusLevel> {
        StatusLevel::parse(&self.y)
    }

    /// Whether the reading carries any label at all (empty labels are not plotted).
    pub fn has_status(&self) -> bool {
        !self.y.is_empty()
    }
}

/// Immutable view of the sequence handed from the source to the chart.
pub type Snapshot = Arc<[Reading]>;

/// Append-only, chronologically ordered readings.
#[derive(Clone, Debug, Default)]
pub struct Readings {
    items: Vec<Reading>,
}

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { items: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, reading: Reading) {
        self.items.push(reading);
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn last(&self) -> Option<&Reading> { self.items.last() }
    pub fn as_slice(&self) -> &[Reading] { &self.items }
    pub fn iter(&self) -> std::slice::Iter<'_, Reading> { self.items.iter() }

    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.items.as_slice())
    }
}

impl<'a> IntoIterator for &'a Readings {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn json_shape_is_time_and_y() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
        let r = Reading::new(t, StatusLevel::Medium);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"time":"2024-03-01T14:05:09.000Z","y":"medium"}"#);
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp().map(|d| d.timestamp()), Some(t.timestamp()));
        assert_eq!(back.status(), Some(StatusLevel::Medium));
    }

    #[test]
    fn snapshot_is_detached_from_later_pushes() {
        let mut rs = Readings::new();
        rs.push(Reading::from_raw("2024-03-01T14:05:09Z", "low"));
        let snap = rs.snapshot();
        rs.push(Reading::from_raw("2024-03-01T14:05:11Z", "high"));
        assert_eq!(snap.len(), 1);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.last().map(|r| r.y.as_str()), Some("high"));
    }
}
