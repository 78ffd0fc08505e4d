//! # Time source abstraction.
//!
//! The exponential engine tracks elapsed wall-clock time against its
//! [`max_elapsed`](crate::ExponentialPolicy::with_max_elapsed) budget. In
//! production that is simply [`Instant::now`]; in tests a substitute clock
//! makes the budget deterministic.
//!
//! The override exists purely for deterministic testing - there is no reason
//! to swap the clock in production code.

use std::time::Instant;

/// Supplies the current time to backoff engines.
///
/// Implementations must be cheap to call; engines read the clock once per
/// [`next`](crate::Backoff::next) call.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The default [`Clock`]: reads the system monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::Clock;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    pub(crate) struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: Mutex::new(Instant::now()),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }

        pub(crate) fn rewind(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now -= by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }
}
