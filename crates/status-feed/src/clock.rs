// File: crates/status-feed/src/clock.rs
// Summary: Wall-clock sources used to stamp readings.

use chrono::{DateTime, TimeDelta, Utc};

pub trait Clock: Send + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fixed wall-clock anchor advanced by tokio's monotonic clock.
/// Under a paused runtime the stamps follow virtual time exactly.
#[derive(Clone, Copy, Debug)]
pub struct AnchoredClock {
    wall: DateTime<Utc>,
    origin: tokio::time::Instant,
}

impl AnchoredClock {
    pub fn new(wall: DateTime<Utc>) -> Self {
        Self { wall, origin: tokio::time::Instant::now() }
    }
}

impl Clock for AnchoredClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.origin.elapsed()).unwrap_or(TimeDelta::zero());
        self.wall + elapsed
    }
}
