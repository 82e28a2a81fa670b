//! Source of the current instant.
//!
//! Every decision the registration services make compares against "now";
//! taking it from an injected clock keeps expiry behaviour testable.

use chrono::{DateTime, Utc};

/// Supplies the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use fixed::FixedClock;

#[cfg(any(test, feature = "test-utils"))]
mod fixed {
    use super::Clock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock frozen at a settable instant, millisecond precision
    #[derive(Debug)]
    pub struct FixedClock {
        millis: AtomicI64,
    }

    impl FixedClock {
        pub fn new(at: DateTime<Utc>) -> Self {
            Self {
                millis: AtomicI64::new(at.timestamp_millis()),
            }
        }

        /// Clock frozen `seconds` after the Unix epoch
        pub fn at_seconds(seconds: i64) -> Self {
            Self {
                millis: AtomicI64::new(seconds * 1000),
            }
        }

        pub fn set(&self, at: DateTime<Utc>) {
            self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
        }

        pub fn advance(&self, by: Duration) {
            self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.millis.load(Ordering::SeqCst))
                .single()
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        }
    }
}
