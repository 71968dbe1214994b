//! Cooperative deadline timers polled from the UI update loop
//!
//! egui has no callback timers, so a timer is a deadline that the owner checks
//! each frame. The owner also asks the context to repaint by
//! [`Timeout::remaining`] / [`Interval::remaining`] so the poll happens on time
//! even when nothing else is animating.

use std::time::{Duration, Instant};

/// Single-shot timer. Fires at most once, never after [`Timeout::cancel`].
#[derive(Debug, Clone)]
pub struct Timeout {
    deadline: Instant,
    state: TimeoutState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeoutState {
    Armed,
    Fired,
    Cancelled,
}

impl Timeout {
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            state: TimeoutState::Armed,
        }
    }

    /// Returns true on the first poll at or after the deadline, false otherwise.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimeoutState::Armed && now >= self.deadline {
            self.state = TimeoutState::Fired;
            return true;
        }
        false
    }

    /// Disarms the timer. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if self.state == TimeoutState::Armed {
            self.state = TimeoutState::Cancelled;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == TimeoutState::Armed
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.state == TimeoutState::Fired
    }

    /// Time left until the deadline, `None` once fired or cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.is_armed()
            .then(|| self.deadline.saturating_duration_since(now))
    }
}

/// Repeating timer with a fixed period.
///
/// A late poll fires once and realigns to the next period boundary after
/// `now`; missed periods are dropped rather than replayed in a burst.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Instant,
    active: bool,
}

impl Interval {
    pub fn new(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next: now + period,
            active: true,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.active || now < self.next {
            return false;
        }
        if self.period.is_zero() {
            self.next = now;
            return true;
        }
        while self.next <= now {
            self.next += self.period;
        }
        true
    }

    /// Stops the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.active
            .then(|| self.next.saturating_duration_since(now))
    }
}

/// Shortest of several optional wait times, for `request_repaint_after`.
pub fn soonest(waits: impl IntoIterator<Item = Option<Duration>>) -> Option<Duration> {
    waits.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn timeout_fires_exactly_once() {
        let t0 = Instant::now();
        let mut timeout = Timeout::new(t0, 1600 * MS);

        assert!(!timeout.poll(t0));
        assert!(!timeout.poll(t0 + 1599 * MS));
        assert!(timeout.poll(t0 + 1600 * MS));
        assert!(!timeout.poll(t0 + 5000 * MS));
        assert!(timeout.has_fired());
        assert_eq!(timeout.remaining(t0 + 5000 * MS), None);
    }

    #[test]
    fn cancelled_timeout_never_fires_and_cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timeout = Timeout::new(t0, 10 * MS);
        timeout.cancel();
        timeout.cancel();

        assert!(!timeout.poll(t0 + 20 * MS));
        assert!(!timeout.is_armed());
        assert!(!timeout.has_fired());
    }

    #[test]
    fn cancel_after_fire_keeps_fired_state() {
        let t0 = Instant::now();
        let mut timeout = Timeout::new(t0, 10 * MS);
        assert!(timeout.poll(t0 + 10 * MS));
        timeout.cancel();
        assert!(timeout.has_fired());
    }

    #[test]
    fn timeout_reports_remaining_time() {
        let t0 = Instant::now();
        let timeout = Timeout::new(t0, 100 * MS);
        assert_eq!(timeout.remaining(t0 + 40 * MS), Some(60 * MS));
        assert_eq!(timeout.remaining(t0 + 400 * MS), Some(Duration::ZERO));
    }

    #[test]
    fn interval_fires_every_period() {
        let t0 = Instant::now();
        let mut every_second = Interval::new(t0, 1000 * MS);

        assert!(!every_second.poll(t0 + 999 * MS));
        assert!(every_second.poll(t0 + 1000 * MS));
        assert!(!every_second.poll(t0 + 1500 * MS));
        assert!(every_second.poll(t0 + 2000 * MS));
    }

    #[test]
    fn late_interval_poll_fires_once_and_realigns() {
        let t0 = Instant::now();
        let mut every_second = Interval::new(t0, 1000 * MS);

        assert!(every_second.poll(t0 + 3500 * MS));
        assert!(!every_second.poll(t0 + 3600 * MS));
        assert_eq!(every_second.remaining(t0 + 3600 * MS), Some(400 * MS));
        assert!(every_second.poll(t0 + 4000 * MS));
    }

    #[test]
    fn cancelled_interval_goes_quiet() {
        let t0 = Instant::now();
        let mut every_second = Interval::new(t0, 1000 * MS);
        every_second.cancel();
        every_second.cancel();

        assert!(!every_second.poll(t0 + 10_000 * MS));
        assert_eq!(every_second.remaining(t0), None);
    }

    #[test]
    fn soonest_picks_minimum_of_present_waits() {
        assert_eq!(soonest([None, Some(30 * MS), Some(10 * MS)]), Some(10 * MS));
        assert_eq!(soonest([None, None]), None);
    }
}
