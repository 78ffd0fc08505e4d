//! # Exponential policy: growing delay with jitter, ceiling, and budget.
//!
//! [`ExponentialPolicy`] configures an [`ExponentialBackoff`] engine. All
//! parameters have defaults from the classic exponential-backoff formula;
//! `with_*` methods adjust them (last write wins, nothing is validated).
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use pacer::{ExponentialPolicy, Policy};
//!
//! let policy = ExponentialPolicy::default()
//!     .with_initial_interval(Duration::from_secs(10))
//!     .with_randomization_factor(0.0) // deterministic, for the assertions below
//!     .with_max_retries(5);
//!
//! let delays: Vec<_> = policy.durations().collect();
//! assert_eq!(delays[0], (0, Duration::from_secs(10)));
//! assert_eq!(delays[1], (1, Duration::from_secs(15)));
//! assert_eq!(delays[4], (4, Duration::from_millis(50_625)));
//! assert_eq!(delays.len(), 5);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::backoff::{Backoff, ExponentialBackoff, LimitedBackoff};
use crate::clock::{Clock, SystemClock};
use crate::policies::Policy;

/// Default first delay: 500 ms.
pub const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_millis(500);
/// Default jitter width: ±50% of the computed interval.
pub const DEFAULT_RANDOMIZATION_FACTOR: f64 = 0.5;
/// Default growth factor per attempt.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;
/// Default ceiling on the computed interval: 60 s.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(60);
/// Default total retry budget: 15 min of wall-clock time.
pub const DEFAULT_MAX_ELAPSED: Duration = Duration::from_secs(15 * 60);

/// Policy with exponentially growing, jittered delays.
#[derive(Clone)]
pub struct ExponentialPolicy {
    initial_interval: Duration,
    randomization_factor: f64,
    multiplier: f64,
    max_interval: Duration,
    max_elapsed: Option<Duration>,
    stop_after: Option<Duration>,
    clock: Arc<dyn Clock>,
    max_retries: u64,
}

impl Default for ExponentialPolicy {
    /// Returns a policy with:
    /// - `initial_interval = 500ms`;
    /// - `randomization_factor = 0.5`;
    /// - `multiplier = 1.5`;
    /// - `max_interval = 60s`;
    /// - `max_elapsed = 15min`, no `stop_after`;
    /// - unlimited retries, system clock.
    fn default() -> Self {
        Self {
            initial_interval: DEFAULT_INITIAL_INTERVAL,
            randomization_factor: DEFAULT_RANDOMIZATION_FACTOR,
            multiplier: DEFAULT_MULTIPLIER,
            max_interval: DEFAULT_MAX_INTERVAL,
            max_elapsed: Some(DEFAULT_MAX_ELAPSED),
            stop_after: None,
            clock: Arc::new(SystemClock),
            max_retries: 0,
        }
    }
}

impl ExponentialPolicy {
    /// Sets the delay before the first retry.
    pub fn with_initial_interval(mut self, d: Duration) -> Self {
        self.initial_interval = d;
        self
    }

    /// Sets the jitter width as a proportion of the computed interval.
    /// `0.0` disables jitter entirely (exactly reproducible sequences).
    pub fn with_randomization_factor(mut self, v: f64) -> Self {
        self.randomization_factor = v;
        self
    }

    /// Sets the growth factor applied to the interval after each attempt.
    pub fn with_multiplier(mut self, v: f64) -> Self {
        self.multiplier = v;
        self
    }

    /// Sets the ceiling on the computed interval. `Duration::ZERO` removes
    /// the ceiling.
    pub fn with_max_interval(mut self, d: Duration) -> Self {
        self.max_interval = d;
        self
    }

    /// Sets the total wall-clock budget; once exceeded the engine stops for
    /// good. `None` disables the budget.
    pub fn with_max_elapsed(mut self, d: Option<Duration>) -> Self {
        self.max_elapsed = d;
        self
    }

    /// Sets an alternate wall-clock budget, checked alongside
    /// [`with_max_elapsed`](Self::with_max_elapsed); whichever trips first
    /// stops the engine.
    pub fn with_stop_after(mut self, d: Option<Duration>) -> Self {
        self.stop_after = d;
        self
    }

    /// Overrides the time source. Exists for deterministic testing.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Caps the number of retries. `0` restores the default (unlimited,
    /// bounded only by the elapsed-time budget).
    pub fn with_max_retries(mut self, n: u64) -> Self {
        self.max_retries = n;
        self
    }

    /// The retry cap (`0` = unlimited).
    pub fn max_retries(&self) -> u64 {
        self.max_retries
    }
}

impl fmt::Debug for ExponentialPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExponentialPolicy")
            .field("initial_interval", &self.initial_interval)
            .field("randomization_factor", &self.randomization_factor)
            .field("multiplier", &self.multiplier)
            .field("max_interval", &self.max_interval)
            .field("max_elapsed", &self.max_elapsed)
            .field("stop_after", &self.stop_after)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl Policy for ExponentialPolicy {
    fn build(&self) -> Box<dyn Backoff + Send> {
        let engine = ExponentialBackoff::new(
            self.initial_interval,
            self.randomization_factor,
            self.multiplier,
            self.max_interval,
            self.max_elapsed,
            self.stop_after,
            self.clock.clone(),
        );
        if self.max_retries > 0 {
            Box::new(LimitedBackoff::new(engine, self.max_retries))
        } else {
            Box::new(engine)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        // initial=10s, rf=0, default multiplier 1.5, five retries.
        let policy = ExponentialPolicy::default()
            .with_initial_interval(Duration::from_secs(10))
            .with_randomization_factor(0.0)
            .with_max_retries(5);

        let pairs: Vec<_> = policy.durations().collect();
        assert_eq!(
            pairs,
            vec![
                (0, Duration::from_secs(10)),
                (1, Duration::from_secs(15)),
                (2, Duration::from_millis(22_500)),
                (3, Duration::from_millis(33_750)),
                (4, Duration::from_millis(50_625)),
            ]
        );
    }

    #[test]
    fn test_last_write_wins() {
        let policy = ExponentialPolicy::default()
            .with_initial_interval(Duration::from_secs(1))
            .with_initial_interval(Duration::from_secs(2))
            .with_randomization_factor(0.0)
            .with_max_retries(1);
        let pairs: Vec<_> = policy.durations().collect();
        assert_eq!(pairs, vec![(0, Duration::from_secs(2))]);
    }

    #[test]
    fn test_factory_builds_independent_engines() {
        let policy = ExponentialPolicy::default()
            .with_initial_interval(Duration::from_millis(100))
            .with_randomization_factor(0.0)
            .with_max_retries(4);
        let a: Vec<_> = policy.durations().collect();
        let b: Vec<_> = policy.durations().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_durations_drain_without_wall_clock_cost() {
        // 10s initial delay, but duration mode never sleeps: draining is
        // immediate and the default 15min budget is nowhere near exceeded.
        let policy = ExponentialPolicy::default()
            .with_initial_interval(Duration::from_secs(10))
            .with_randomization_factor(0.0)
            .with_max_retries(50);
        assert_eq!(policy.durations().count(), 50);
    }

    #[test]
    fn test_debug_omits_clock() {
        let policy = ExponentialPolicy::default();
        let s = format!("{policy:?}");
        assert!(s.contains("ExponentialPolicy"));
        assert!(s.contains("multiplier"));
    }
}
