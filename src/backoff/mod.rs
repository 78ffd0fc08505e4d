//! Backoff engines: stateful generators of retry delays.
//!
//! An engine is created fresh for every iteration by a
//! [`Policy`](crate::Policy) and advances its internal state once per call.
//! The single operation is [`Backoff::next`]: `Some(delay)` means "wait this
//! long, then try again", `None` means "stop retrying".
//!
//! ## Contents
//! - [`StopBackoff`] never retry
//! - [`ZeroBackoff`] retry immediately, forever
//! - [`FixedBackoff`] retry with a fixed delay, forever
//! - [`ExponentialBackoff`] growing delay with jitter, ceiling, and an
//!   elapsed-time budget
//! - [`LimitedBackoff`] wraps any engine with an attempt-count cap
//!
//! ## Rules
//! - Engines are **single-use**: one engine per iteration, never shared.
//! - `None` is terminal for [`ExponentialBackoff`] (one-way latch) and
//!   [`LimitedBackoff`]; callers may rely on stop being permanent.

mod constant;
mod exponential;
mod limited;

pub use constant::{FixedBackoff, StopBackoff, ZeroBackoff};
pub use exponential::ExponentialBackoff;
pub use limited::LimitedBackoff;

use std::time::Duration;

/// A stateful generator of retry delays.
///
/// `next` advances the engine by one attempt and returns the delay to wait
/// before that attempt, or `None` when retrying should stop.
pub trait Backoff {
    /// Computes the delay before the next attempt, or `None` to stop.
    fn next(&mut self) -> Option<Duration>;
}

impl<B: Backoff + ?Sized> Backoff for Box<B> {
    fn next(&mut self) -> Option<Duration> {
        (**self).next()
    }
}
