// File: crates/status-feed/src/config.rs
// Summary: Feed timing and seeding parameters.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::FeedError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Period between appended readings.
    pub interval: Duration,
    /// Readings synthesized on activation.
    pub seed_count: usize,
    /// Fixed RNG seed for reproducible label sequences; entropy when `None`.
    pub rng_seed: Option<u64>,
}

impl FeedConfig {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);
    pub const DEFAULT_SEED_COUNT: usize = 10;

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Checks the interval and returns it as a chrono step. The whole seeded
    /// history (`interval × seed_count`) must stay inside the representable
    /// date range when stamped back from the epoch.
    pub fn validate(&self) -> Result<TimeDelta, FeedError> {
        if self.interval.is_zero() {
            return Err(FeedError::ZeroInterval);
        }
        let out_of_range = FeedError::IntervalOutOfRange(self.interval);
        let step = TimeDelta::from_std(self.interval).map_err(|_| out_of_range.clone())?;
        let span = i32::try_from(self.seed_count)
            .ok()
            .and_then(|n| step.checked_mul(n))
            .ok_or_else(|| out_of_range.clone())?;
        DateTime::<Utc>::UNIX_EPOCH.checked_sub_signed(span).ok_or(out_of_range)?;
        Ok(step)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { interval: Self::DEFAULT_INTERVAL, seed_count: Self::DEFAULT_SEED_COUNT, rng_seed: None }
    }
}
