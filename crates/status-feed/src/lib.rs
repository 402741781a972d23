// File: crates/status-feed/src/lib.rs
// Summary: Data source for the realtime status chart.
//
// A `StatusFeed` owns the append-only reading sequence. `FeedHandle::activate`
// seeds it and starts a repeating tokio task that appends one reading per
// interval and publishes each new snapshot on a watch channel. Dropping or
// stopping the handle cancels the task.

pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod task;

pub use clock::{AnchoredClock, Clock, SystemClock};
pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::{FeedSummary, StatusFeed};
pub use task::FeedHandle;
