//! # Duration sequence: raw `(index, delay)` pairs, no sleeping.
//!
//! [`Durations`] reports what the engine would wait without waiting itself;
//! the caller decides whether, where, and how to sleep — which is also why
//! this mode takes no cancellation token. It never blocks, so a test can
//! drain it fully at zero wall-clock cost.

use std::iter::FusedIterator;
use std::time::Duration;

use crate::backoff::Backoff;

/// Lazy iterator of `(attempt index, delay)` pairs.
///
/// Created by [`Policy::durations`](crate::Policy::durations); ends when the
/// engine reports stop.
///
/// ```rust
/// use std::time::Duration;
/// use pacer::{ExponentialPolicy, Policy};
///
/// let policy = ExponentialPolicy::default()
///     .with_initial_interval(Duration::from_secs(10))
///     .with_randomization_factor(0.0)
///     .with_max_retries(5);
///
/// for (i, delay) in policy.durations() {
///     println!("attempt {i}: would wait {delay:?}");
/// }
/// ```
pub struct Durations {
    engine: Box<dyn Backoff + Send>,
    index: u64,
    done: bool,
}

impl Durations {
    pub(crate) fn new(engine: Box<dyn Backoff + Send>) -> Self {
        Self {
            engine,
            index: 0,
            done: false,
        }
    }
}

impl Iterator for Durations {
    type Item = (u64, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.engine.next() {
            None => {
                self.done = true;
                None
            }
            Some(delay) => {
                let index = self.index;
                self.index += 1;
                Some((index, delay))
            }
        }
    }
}

impl FusedIterator for Durations {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{ConstantPolicy, ExponentialPolicy, Policy};

    #[test]
    fn test_indices_are_consecutive_from_zero() {
        let policy = ConstantPolicy::new(Duration::from_millis(5)).with_max_retries(7);
        let indices: Vec<_> = policy.durations().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_never_policy_is_empty() {
        let policy = ConstantPolicy::never();
        assert_eq!(policy.durations().next(), None);
    }

    #[test]
    fn test_fused_after_stop() {
        let policy = ConstantPolicy::new(Duration::from_millis(5)).with_max_retries(1);
        let mut durations = policy.durations();
        assert!(durations.next().is_some());
        assert_eq!(durations.next(), None);
        assert_eq!(durations.next(), None);
    }

    #[test]
    fn test_jittered_pairs_stay_in_band() {
        let policy = ExponentialPolicy::default()
            .with_initial_interval(Duration::from_millis(1000))
            .with_randomization_factor(0.5)
            .with_multiplier(1.0)
            .with_max_retries(100);
        for (_, delay) in policy.durations() {
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(1500));
        }
    }
}
