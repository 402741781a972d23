// File: crates/status-feed/src/feed.rs
// Summary: The owned reading sequence and the rules for seeding and appending to it.

use std::fmt;

use chart_core::{Reading, Readings, Snapshot, StatusLevel};
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::config::FeedConfig;
use crate::error::FeedError;

/// Count and latest label of the sequence, as shown under the chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSummary {
    pub count: usize,
    pub last_status: Option<String>,
}

impl FeedSummary {
    pub fn of(readings: &[Reading]) -> Self {
        Self { count: readings.len(), last_status: readings.last().map(|r| r.y.clone()) }
    }
}

impl fmt::Display for FeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} data points, last status: {}",
            self.count,
            self.last_status.as_deref().unwrap_or("none")
        )
    }
}

/// Generates readings with uniformly random status labels.
pub struct StatusFeed<R = StdRng, C = SystemClock> {
    config: FeedConfig,
    step: TimeDelta,
    readings: Readings,
    rng: R,
    clock: C,
}

impl StatusFeed<StdRng, SystemClock> {
    /// Feed on the system clock; seeded RNG when the config carries a seed.
    pub fn from_config(config: FeedConfig) -> Result<Self, FeedError> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> StatusFeed<R, C> {
    pub fn new(config: FeedConfig, rng: R, clock: C) -> Result<Self, FeedError> {
        let step = config.validate()?;
        Ok(Self { config, step, readings: Readings::with_capacity(config.seed_count), rng, clock })
    }

    pub fn config(&self) -> &FeedConfig { &self.config }
    pub fn readings(&self) -> &Readings { &self.readings }
    pub fn snapshot(&self) -> Snapshot { self.readings.snapshot() }

    /// Synthesize the initial history: `seed_count` readings one interval apart,
    /// the newest one interval before now. No-op once the sequence has data.
    /// Returns the number of readings added.
    pub fn seed(&mut self) -> usize {
        if !self.readings.is_empty() {
            return 0;
        }
        let now = self.clock.now();
        let n = self.config.seed_count;
        for i in 0..n {
            let stamp = i32::try_from(n - i)
                .ok()
                .and_then(|k| self.step.checked_mul(k))
                .and_then(|back| now.checked_sub_signed(back))
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            let level = self.random_level();
            self.readings.push(Reading::new(stamp, level));
        }
        n
    }

    /// Append one reading stamped with the current time.
    pub fn tick(&mut self) -> &Reading {
        let level = self.random_level();
        self.readings.push(Reading::new(self.clock.now(), level));
        // The sequence is non-empty right after a push.
        &self.readings.as_slice()[self.readings.len() - 1]
    }

    pub fn summary(&self) -> FeedSummary {
        FeedSummary::of(self.readings.as_slice())
    }

    fn random_level(&mut self) -> StatusLevel {
        StatusLevel::ALL[self.rng.gen_range(0..StatusLevel::ALL.len())]
    }
}
