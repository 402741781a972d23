// File: crates/chart-core/src/view.rs
// Scroll view state: horizontal offset of the scroll region and the auto-follow flag.

use std::time::Duration;

use crate::geometry::clamp;
use crate::types::END_THRESHOLD;

/// Auto-scroll state. `Following` re-pins the viewport to the end whenever content grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Follow {
    #[default]
    Following,
    Detached,
}

/// Eased transition between two scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    pub from: f64,
    pub to: f64,
    elapsed: Duration,
    duration: Duration,
}

impl SmoothScroll {
    pub const DURATION: Duration = Duration::from_millis(300);

    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to, elapsed: Duration::ZERO, duration: Self::DURATION }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_done(&self) -> bool { self.elapsed >= self.duration }

    /// Current offset on an ease-out cubic curve.
    pub fn position(&self) -> f64 {
        let t = if self.duration.is_zero() { 1.0 } else { self.elapsed.as_secs_f64() / self.duration.as_secs_f64() };
        let e = 1.0 - (1.0 - t.min(1.0)).powi(3);
        self.from + (self.to - self.from) * e
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    pub client_width: f64,
    pub scroll_width: f64,
    scroll_left: f64,
    follow: Follow,
    animation: Option<SmoothScroll>,
}

impl ScrollView {
    pub fn new(client_width: f64, scroll_width: f64) -> Self {
        Self {
            client_width,
            scroll_width: scroll_width.max(client_width),
            scroll_left: 0.0,
            follow: Follow::Following,
            animation: None,
        }
    }

    /// Logical scroll offset (the animation target while a smooth scroll runs).
    pub fn scroll_left(&self) -> f64 { self.scroll_left }
    pub fn follow(&self) -> Follow { self.follow }
    pub fn is_following(&self) -> bool { self.follow == Follow::Following }

    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn distance_from_end(&self) -> f64 {
        (self.scroll_width - self.client_width - self.scroll_left).abs()
    }

    pub fn is_at_end(&self) -> bool {
        self.distance_from_end() < END_THRESHOLD
    }

    /// Content width changed (readings appended). Returns whether the view followed.
    pub fn on_content_resized(&mut self, scroll_width: f64) -> bool {
        self.scroll_width = scroll_width.max(self.client_width);
        if self.follow == Follow::Following {
            self.pin_to_end();
            true
        } else {
            self.scroll_left = clamp(self.scroll_left, 0.0, self.max_scroll_left());
            false
        }
    }

    /// A user-initiated scroll to `left`. Re-evaluates the follow flag.
    pub fn on_user_scroll(&mut self, left: f64) -> Follow {
        self.animation = None;
        self.scroll_left = clamp(left, 0.0, self.max_scroll_left());
        let next = if self.is_at_end() { Follow::Following } else { Follow::Detached };
        if next != self.follow {
            tracing::debug!(?next, distance = self.distance_from_end(), "auto-scroll state changed");
            self.follow = next;
            if next == Follow::Following {
                self.pin_to_end();
            }
        }
        next
    }

    pub fn scroll_by(&mut self, dx: f64) -> Follow {
        self.on_user_scroll(self.displayed_left() + dx)
    }

    /// Offset to draw at right now, accounting for a running smooth scroll.
    pub fn displayed_left(&self) -> f64 {
        self.animation.map(|a| a.position()).unwrap_or(self.scroll_left)
    }

    pub fn is_animating(&self) -> bool { self.animation.is_some() }

    /// Step a running smooth scroll. Returns true while it is still in flight.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if let Some(a) = self.animation.as_mut() {
            a.advance(dt);
            if a.is_done() {
                self.animation = None;
            }
        }
        self.animation.is_some()
    }

    fn pin_to_end(&mut self) {
        let from = self.displayed_left();
        self.scroll_left = self.max_scroll_left();
        self.animation = if (self.scroll_left - from).abs() > f64::EPSILON {
            Some(SmoothScroll::new(from, self.scroll_left))
        } else {
            None
        };
    }
}
