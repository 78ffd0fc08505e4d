//! # Constant policy: stop, zero-delay, or fixed-delay retries.
//!
//! [`ConstantPolicy`] selects one of three engines from its interval:
//! - [`ConstantPolicy::never`] → stop immediately, never retry;
//! - `new(Duration::ZERO)` → retry with no delay;
//! - `new(d)` with `d > 0` → retry with the same delay every time.
//!
//! All three are unbounded until [`with_max_retries`](ConstantPolicy::with_max_retries)
//! caps them (`never()` ignores the cap: there is nothing to count).
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use pacer::{ConstantPolicy, Policy};
//!
//! let policy = ConstantPolicy::new(Duration::from_secs(42)).with_max_retries(5);
//! let delays: Vec<_> = policy.durations().collect();
//!
//! assert_eq!(delays.len(), 5);
//! assert_eq!(delays[0], (0, Duration::from_secs(42)));
//! assert_eq!(delays[4], (4, Duration::from_secs(42)));
//! ```

use std::time::Duration;

use crate::backoff::{Backoff, FixedBackoff, LimitedBackoff, StopBackoff, ZeroBackoff};
use crate::policies::Policy;

/// Policy with a constant delay between retries (or no retries at all).
#[derive(Clone, Copy, Debug)]
pub struct ConstantPolicy {
    /// `None` = never retry.
    interval: Option<Duration>,
    /// Retry cap, `0` = unlimited.
    max_retries: u64,
}

impl ConstantPolicy {
    /// Creates a policy that retries forever with the given delay between
    /// attempts. A zero interval retries immediately.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: Some(interval),
            max_retries: 0,
        }
    }

    /// Creates a policy that never retries: its sequences yield the initial
    /// attempt and stop.
    pub fn never() -> Self {
        Self {
            interval: None,
            max_retries: 0,
        }
    }

    /// Caps the number of retries. `0` restores the default (unlimited).
    pub fn with_max_retries(mut self, n: u64) -> Self {
        self.max_retries = n;
        self
    }

    /// The configured delay, or `None` for the never-retry variant.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// The retry cap (`0` = unlimited).
    pub fn max_retries(&self) -> u64 {
        self.max_retries
    }
}

impl Policy for ConstantPolicy {
    fn build(&self) -> Box<dyn Backoff + Send> {
        let base: Box<dyn Backoff + Send> = match self.interval {
            None => return Box::new(StopBackoff),
            Some(d) if d.is_zero() => Box::new(ZeroBackoff),
            Some(d) => Box::new(FixedBackoff::new(d)),
        };
        if self.max_retries > 0 {
            Box::new(LimitedBackoff::new(base, self.max_retries))
        } else {
            base
        }
    }
}
