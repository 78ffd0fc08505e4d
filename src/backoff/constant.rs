//! # Constant-family engines: stop, zero, and fixed delay.
//!
//! These three engines back [`ConstantPolicy`](crate::ConstantPolicy):
//! - [`StopBackoff`] — stop immediately, never retry;
//! - [`ZeroBackoff`] — retry with no delay, unbounded;
//! - [`FixedBackoff`] — retry with the same delay every time, unbounded.
//!
//! None of them keeps internal state; bounding the number of attempts is the
//! job of [`LimitedBackoff`](crate::LimitedBackoff).

use std::time::Duration;

use crate::backoff::Backoff;

/// Engine that never retries: every call returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StopBackoff;

impl Backoff for StopBackoff {
    fn next(&mut self) -> Option<Duration> {
        None
    }
}

/// Engine that retries immediately: every call returns a zero delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroBackoff;

impl Backoff for ZeroBackoff {
    fn next(&mut self) -> Option<Duration> {
        Some(Duration::ZERO)
    }
}

/// Engine that retries with the same delay every time.
#[derive(Clone, Copy, Debug)]
pub struct FixedBackoff {
    interval: Duration,
}

impl FixedBackoff {
    /// Creates an engine that always yields `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Backoff for FixedBackoff {
    fn next(&mut self) -> Option<Duration> {
        Some(self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_always_none() {
        let mut b = StopBackoff;
        for _ in 0..10 {
            assert_eq!(b.next(), None);
        }
    }

    #[test]
    fn test_zero_always_zero() {
        let mut b = ZeroBackoff;
        for _ in 0..10 {
            assert_eq!(b.next(), Some(Duration::ZERO));
        }
    }

    #[test]
    fn test_fixed_always_interval() {
        let mut b = FixedBackoff::new(Duration::from_millis(250));
        for _ in 0..10 {
            assert_eq!(b.next(), Some(Duration::from_millis(250)));
        }
    }
}
