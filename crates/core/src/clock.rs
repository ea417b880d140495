//! Time source for aggregates.
//!
//! Aggregates never read the system time directly; they take a
//! [`mockable::Clock`] so tests can pin and advance time.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeDelta, Utc};

pub use mockable::{Clock, DefaultClock};

/// Settable clock for tests and deterministic replays.
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock() = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.lock() += delta;
    }

    pub fn advance_seconds(&self, seconds: i64) {
        self.advance(TimeDelta::seconds(seconds));
    }

    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_clock_is_settable_and_advances() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.utc(), start);

        clock.advance_seconds(90);
        assert_eq!(clock.utc(), start + TimeDelta::seconds(90));

        clock.set(start);
        assert_eq!(clock.utc(), start);
        assert_eq!(clock.local(), start.with_timezone(&Local));
    }

    #[test]
    fn default_clock_tracks_system_time() {
        let before = Utc::now();
        let now = DefaultClock.utc();
        assert!(now >= before);
    }
}
