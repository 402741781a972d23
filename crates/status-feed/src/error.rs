// File: crates/status-feed/src/error.rs
// Summary: Configuration errors raised when building a feed.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("feed interval must be non-zero")]
    ZeroInterval,

    #[error("feed interval {0:?} is too large to stamp readings with")]
    IntervalOutOfRange(std::time::Duration),
}
