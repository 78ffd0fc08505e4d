//! # Exponential engine: growing delay with jitter and ceilings.
//!
//! Each call yields the current interval perturbed by a proportional jitter,
//! then multiplies the interval for the next call:
//! ```text
//! delay(n)   = uniform[current × (1 − rf), current × (1 + rf)]  clamped to [0, max_interval]
//! current'   = min(current × multiplier, max_interval)
//! ```
//! Before yielding, the engine checks elapsed wall-clock time (via the
//! configured [`Clock`]) against its budget(s). Once a budget is exceeded the
//! engine is **exhausted for good**: the latch is an explicit flag, never
//! re-derived from the clock, so a skewed or rewound clock cannot resurrect a
//! stopped engine.
//!
//! ## Rules
//! - `randomization_factor == 0` never touches the RNG: the sequence is
//!   exactly reproducible.
//! - `max_interval == 0` disables the ceiling.
//! - A budget of `Some(Duration::ZERO)` stops on the very first call.
//! - Pathological parameters (negative multiplier, NaN factors) are the
//!   caller's responsibility; float overflow saturates at `max_interval`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::backoff::Backoff;
use crate::clock::Clock;

/// Engine producing exponentially growing, jittered delays.
///
/// Built by [`ExponentialPolicy`](crate::ExponentialPolicy); see the policy
/// for parameter defaults.
pub struct ExponentialBackoff {
    current: Duration,
    randomization_factor: f64,
    multiplier: f64,
    max_interval: Duration,
    max_elapsed: Option<Duration>,
    stop_after: Option<Duration>,
    clock: Arc<dyn Clock>,
    start: Instant,
    exhausted: bool,
}

impl ExponentialBackoff {
    /// Creates a fresh engine. `start` is read from `clock` now; elapsed
    /// time is measured from this moment.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        initial: Duration,
        randomization_factor: f64,
        multiplier: f64,
        max_interval: Duration,
        max_elapsed: Option<Duration>,
        stop_after: Option<Duration>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let start = clock.now();
        Self {
            current: initial,
            randomization_factor,
            multiplier,
            max_interval,
            max_elapsed,
            stop_after,
            clock,
            start,
            exhausted: false,
        }
    }

    fn budget_exceeded(&self, elapsed: Duration) -> bool {
        let over = |budget: Option<Duration>| {
            budget.is_some_and(|b| b.is_zero() || elapsed > b)
        };
        over(self.max_elapsed) || over(self.stop_after)
    }

    /// Jitters `interval` into `[interval × (1 − rf), interval × (1 + rf)]`,
    /// clamped to `[0, max_interval]` when a ceiling is set.
    fn randomized(&self, interval: Duration) -> Duration {
        if self.randomization_factor <= 0.0 {
            return interval;
        }
        let secs = interval.as_secs_f64();
        let delta = self.randomization_factor * secs;
        let low = (secs - delta).max(0.0);
        let high = secs + delta;

        let mut sampled = rand::rng().random_range(low..=high);
        if self.max_interval > Duration::ZERO {
            sampled = sampled.min(self.max_interval.as_secs_f64());
        }
        Duration::from_secs_f64(sampled.max(0.0))
    }

    /// Multiplies the current interval for the next call, saturating at the
    /// ceiling (or on float overflow).
    fn advance(&mut self) {
        let next_secs = self.current.as_secs_f64() * self.multiplier;
        if self.max_interval > Duration::ZERO {
            let max_secs = self.max_interval.as_secs_f64();
            if !next_secs.is_finite() || next_secs >= max_secs {
                self.current = self.max_interval;
                return;
            }
        }
        if next_secs.is_finite() && next_secs >= 0.0 {
            self.current = Duration::from_secs_f64(next_secs);
        }
    }
}

impl Backoff for ExponentialBackoff {
    fn next(&mut self) -> Option<Duration> {
        if self.exhausted {
            return None;
        }
        let elapsed = self.clock.now().saturating_duration_since(self.start);
        if self.budget_exceeded(elapsed) {
            self.exhausted = true;
            return None;
        }

        let mut delay = self.current;
        if self.max_interval > Duration::ZERO {
            delay = delay.min(self.max_interval);
        }
        let delay = self.randomized(delay);
        self.advance();
        Some(delay)
    }
}
