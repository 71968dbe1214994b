//! Live "age" label shown on the home view

use crate::timer::Interval;
use chrono::{Datelike, Timelike};
use std::time::{Duration, Instant};

/// Format the age label: `{years}.{MM}{DD}{HH}{SS}`.
///
/// Month, day, hour and second come from `now`, not from the birth date, and
/// minutes are left out on purpose.
pub fn compute<T: Datelike + Timelike>(now: &T, birth_year: i32) -> String {
    format!(
        "{}.{:02}{:02}{:02}{:02}",
        now.year() - birth_year,
        now.month(),
        now.day(),
        now.hour(),
        now.second()
    )
}

/// Age label that refreshes itself once per second while mounted.
pub struct AgeCounter {
    birth_year: i32,
    text: String,
    ticker: Option<Interval>,
}

impl AgeCounter {
    pub const REFRESH: Duration = Duration::from_secs(1);

    pub fn new(birth_year: i32) -> Self {
        Self {
            birth_year,
            text: String::new(),
            ticker: None,
        }
    }

    /// Computes the first value immediately and starts the 1 s ticker.
    pub fn mount<T: Datelike + Timelike>(&mut self, instant: Instant, wall: &T) {
        self.text = compute(wall, self.birth_year);
        self.ticker = Some(Interval::new(instant, Self::REFRESH));
    }

    /// Returns true when the label was recomputed.
    pub fn poll<T: Datelike + Timelike>(&mut self, instant: Instant, wall: &T) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };
        if !ticker.poll(instant) {
            return false;
        }
        self.text = compute(wall, self.birth_year);
        true
    }

    /// Releases the ticker. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn remaining(&self, instant: Instant) -> Option<Duration> {
        self.ticker.as_ref().and_then(|t| t.remaining(instant))
    }
}
