// File: crates/status-feed/tests/lifecycle.rs
// Purpose: Activation, periodic appends and teardown of the feed task on paused time.

use std::cell::Cell;
use std::time::Duration;

use chart_core::StatusLevel;
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use status_feed::{AnchoredClock, Clock, FeedConfig, FeedHandle, StatusFeed};

fn anchored_feed(seed: u64) -> StatusFeed<StdRng, AnchoredClock> {
    let wall = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
    StatusFeed::new(FeedConfig::default(), StdRng::seed_from_u64(seed), AnchoredClock::new(wall)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn activation_publishes_seeded_snapshot() {
    let (handle, rx) = FeedHandle::activate(anchored_feed(1));
    assert_eq!(rx.borrow().len(), 10);
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn three_firings_after_six_seconds() {
    let (handle, mut rx) = FeedHandle::activate(anchored_feed(2));

    tokio::time::sleep(Duration::from_millis(6_100)).await;
    let snap = rx.borrow_and_update().clone();
    assert_eq!(snap.len(), 13);

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
    let last = &snap[12];
    let stamp = last.timestamp().expect("valid timestamp");
    assert_eq!(stamp.timestamp(), (start + chrono::TimeDelta::seconds(6)).timestamp());
    assert!(StatusLevel::parse(&last.y).is_some());

    // seeds end one interval before activation, appends continue one interval apart
    let secs: Vec<i64> = snap.iter().map(|r| r.timestamp().unwrap().timestamp()).collect();
    assert!(secs.windows(2).all(|w| w[1] - w[0] == 2), "{secs:?}");

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn first_append_waits_a_full_interval() {
    let (handle, rx) = FeedHandle::activate(anchored_feed(3));
    tokio::time::sleep(Duration::from_millis(1_900)).await;
    assert_eq!(rx.borrow().len(), 10);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(rx.borrow().len(), 11);
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn stop_ends_mutation() {
    let (handle, rx) = FeedHandle::activate(anchored_feed(4));
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    handle.stop().await;
    tokio::time::sleep(Duration::from_secs(20)).await;
    assert_eq!(rx.borrow().len(), 11);
}

#[tokio::test(start_paused = true)]
async fn drop_releases_the_timer() {
    let (handle, rx) = FeedHandle::activate(anchored_feed(5));
    assert!(!handle.is_finished());
    drop(handle);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.borrow().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn every_update_is_a_complete_snapshot() {
    let (handle, mut rx) = FeedHandle::activate(anchored_feed(6));
    let mut seen = Vec::new();
    for _ in 0..4 {
        rx.changed().await.expect("feed alive");
        seen.push(rx.borrow_and_update().len());
    }
    assert_eq!(seen, vec![11, 12, 13, 14]);
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn task_ends_when_receivers_are_gone() {
    let (handle, rx) = FeedHandle::activate(anchored_feed(7));
    drop(rx);
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    tokio::task::yield_now().await;
    assert!(handle.is_finished());
}

/// Answers the seeding call, then panics on the first timer append.
struct FailingClock {
    calls: Cell<usize>,
}

impl Clock for FailingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n > 0 {
            panic!("clock unavailable");
        }
        Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn stop_survives_a_panicked_task() {
    let feed = StatusFeed::new(FeedConfig::default(), StdRng::seed_from_u64(9), FailingClock { calls: Cell::new(0) }).unwrap();
    let (handle, rx) = FeedHandle::activate(feed);
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    assert!(handle.is_finished());
    handle.stop().await;
    assert_eq!(rx.borrow().len(), 10);
}
