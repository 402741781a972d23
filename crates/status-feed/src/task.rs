// File: crates/status-feed/src/task.rs
// Summary: Cancellable repeating task that drives a StatusFeed and publishes snapshots.

use chart_core::Snapshot;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::clock::Clock;
use crate::feed::StatusFeed;

/// Lifetime of an active feed. The timer is released exactly once, by `stop`
/// or on drop, whichever comes first.
///
/// ```no_run
/// use status_feed::{FeedConfig, FeedHandle, StatusFeed};
///
/// # async fn run() {
/// let feed = StatusFeed::from_config(FeedConfig::default()).unwrap();
/// let (handle, mut rx) = FeedHandle::activate(feed);
/// rx.changed().await.unwrap();
/// println!("{} readings", rx.borrow().len());
/// handle.stop().await;
/// # }
/// ```
#[derive(Debug)]
pub struct FeedHandle {
    stop_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    /// Seed `feed` (if empty), publish the seeded snapshot, and start appending one
    /// reading per configured interval. Must be called within a tokio runtime.
    ///
    /// The first append happens one full interval after activation. The task ends
    /// on its own if every receiver is dropped.
    pub fn activate<R, C>(mut feed: StatusFeed<R, C>) -> (Self, watch::Receiver<Snapshot>)
    where
        R: Rng + Send + 'static,
        C: Clock,
    {
        let seeded = feed.seed();
        let (tx, rx) = watch::channel(feed.snapshot());
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let period = feed.config().interval;
        let first_tick = Instant::now() + period;
        tracing::info!(seeded, interval_ms = period.as_millis() as u64, "status feed activated");

        let task = tokio::spawn(async move {
            let mut timer = interval_at(first_tick, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                    _ = timer.tick() => {
                        let reading = feed.tick();
                        tracing::debug!(time = %reading.time, status = %reading.y, "appended reading");
                        if tx.send(feed.snapshot()).is_err() {
                            tracing::debug!("no snapshot receivers left");
                            break;
                        }
                    }
                }
            }
            tracing::info!(summary = %feed.summary(), "status feed stopped");
        });

        (Self { stop_tx, task: Some(task) }, rx)
    }

    /// Cancel the timer and wait for the task to finish. No reading is appended
    /// after this returns.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "status feed task ended abnormally");
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.stop_tx.send(true);
            task.abort();
        }
    }
}
