//! Test utilities for the engine crate.
//!
//! Shared helpers for unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled only when the `test-support` feature is enabled; the
//! crate's dev-dependency on itself turns the feature on for test builds.

pub mod clock {
    //! Deterministic clocks for lifecycle-sensitive tests.

    use std::sync::{Mutex, PoisonError};

    use chrono::{DateTime, Days, Local, Utc};
    use mockable::Clock;

    /// Clock frozen at a fixed instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixtureClock {
        /// The instant every read returns.
        pub utc_now: DateTime<Utc>,
    }

    impl FixtureClock {
        /// Freeze the clock at `utc_now`.
        #[must_use]
        pub const fn new(utc_now: DateTime<Utc>) -> Self {
            Self { utc_now }
        }
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    /// Clock a test can move between operations.
    #[derive(Debug)]
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        /// Start the clock at `utc_now`.
        #[must_use]
        pub const fn new(utc_now: DateTime<Utc>) -> Self {
            Self(Mutex::new(utc_now))
        }

        /// Jump to `utc_now`.
        pub fn set(&self, utc_now: DateTime<Utc>) {
            *self.0.lock().unwrap_or_else(PoisonError::into_inner) = utc_now;
        }

        /// Advance by whole days, saturating at the calendar's edge.
        pub fn advance_days(&self, days: u64) {
            let mut now = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            *now = now
                .checked_add_days(Days::new(days))
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

}

pub mod roster_backend;
