//! Retry-timing policies: immutable configuration and sequence factories.
//!
//! A policy is pure data describing how retry delays evolve. It is also a
//! **sequence factory**: every call to [`Policy::attempts`] or
//! [`Policy::durations`] builds a fresh engine, so the same policy value can
//! drive any number of independent iterations without shared state.
//!
//! ## Contents
//! - [`ConstantPolicy`] stop / zero-delay / fixed-delay family
//! - [`ExponentialPolicy`] growing delay with jitter, ceiling, and budget
//! - [`Policy`] the factory trait both implement
//!
//! ## Quick wiring
//! ```text
//! ConstantPolicy / ExponentialPolicy
//!      └─► Policy::build()      → Box<dyn Backoff>   (fresh per iteration)
//!           ├─► attempts()      → Attempts   (async, sleeps internally)
//!           ├─► attempts_with() → Attempts   (cancellable)
//!           └─► durations()     → Durations  (sync, caller sleeps)
//! ```

mod constant;
mod exponential;

pub use constant::ConstantPolicy;
pub use exponential::ExponentialPolicy;

use tokio_util::sync::CancellationToken;

use crate::backoff::Backoff;
use crate::iter::{Attempts, Durations};

/// A reusable factory of retry-timing sequences.
///
/// Policies never fail to construct and are never mutated by iteration;
/// each factory method builds a fresh [`Backoff`] engine.
pub trait Policy {
    /// Builds a fresh engine for one iteration.
    fn build(&self) -> Box<dyn Backoff + Send>;

    /// Starts an attempt-index sequence that sleeps internally between
    /// yields. Without a token the sequence is stopped only by the engine or
    /// by the consumer breaking out of the loop.
    fn attempts(&self) -> Attempts {
        Attempts::new(self.build(), None)
    }

    /// Starts an attempt-index sequence tied to `cancel`: if the token fires
    /// during a wait, the sequence ends immediately without yielding the
    /// pending index.
    fn attempts_with(&self, cancel: CancellationToken) -> Attempts {
        Attempts::new(self.build(), Some(cancel))
    }

    /// Starts a duration sequence: `(index, delay)` pairs with no internal
    /// sleeping. Waiting, and any cancellation of that wait, belongs to the
    /// caller.
    fn durations(&self) -> Durations {
        Durations::new(self.build())
    }
}
