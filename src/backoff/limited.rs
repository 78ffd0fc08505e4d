//! # Attempt-count limiter.
//!
//! [`LimitedBackoff`] decorates any engine with a retry ceiling: after
//! `limit` successful (non-stop) delays it forces `None`, no matter what the
//! inner engine would have said. A limit of `0` disables the cap entirely
//! (pass-through), so unbounded policies compose through the same type.

use std::time::Duration;

use crate::backoff::Backoff;

/// Wraps an engine and stops it after a fixed number of delays.
#[derive(Clone, Copy, Debug)]
pub struct LimitedBackoff<B> {
    inner: B,
    limit: u64,
    taken: u64,
}

impl<B: Backoff> LimitedBackoff<B> {
    /// Caps `inner` at `limit` delays. `limit == 0` means no cap.
    pub fn new(inner: B, limit: u64) -> Self {
        Self {
            inner,
            limit,
            taken: 0,
        }
    }
}

impl<B: Backoff> Backoff for LimitedBackoff<B> {
    fn next(&mut self) -> Option<Duration> {
        if self.limit > 0 && self.taken >= self.limit {
            return None;
        }
        let delay = self.inner.next()?;
        self.taken += 1;
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff::{StopBackoff, ZeroBackoff};

    #[test]
    fn test_caps_after_limit() {
        let mut b = LimitedBackoff::new(ZeroBackoff, 3);
        assert!(b.next().is_some());
        assert!(b.next().is_some());
        assert!(b.next().is_some());
        assert_eq!(b.next(), None);
        assert_eq!(b.next(), None);
    }

    #[test]
    fn test_zero_limit_is_pass_through() {
        let mut b = LimitedBackoff::new(ZeroBackoff, 0);
        for _ in 0..100 {
            assert!(b.next().is_some());
        }
    }

    #[test]
    fn test_inner_stop_wins_over_limit() {
        let mut b = LimitedBackoff::new(StopBackoff, 5);
        assert_eq!(b.next(), None);
    }
}
