//! # Attempt-index sequence: yield, sleep, repeat.
//!
//! [`Attempts`] is a [`Stream`] of attempt indices `0, 1, 2, …`. Between
//! yields it asks its engine for the next delay and suspends on a tokio
//! timer; an external [`CancellationToken`] aborts the wait immediately.
//!
//! ## State machine
//! ```text
//! Start ──(first poll)──► yield 0
//!   ▼
//! Idle ──► token already cancelled? ──► Done
//!   │          engine says stop?     ──► Done
//!   ▼
//! Sleeping(delay)
//!   ├─ token fires  ──► Done            (pending index is never yielded)
//!   └─ timer fires  ──► yield index+1 ──► Idle
//! ```
//!
//! ## Rules
//! - Index 0 is always yielded, even with a pre-cancelled token: the initial
//!   attempt belongs to the caller, retries are what the token guards.
//! - Cancellation is polled **before** the timer, so a fired token can never
//!   be outrun by a timer that expired in the same tick.
//! - All delay work happens on the poll *after* an index was yielded:
//!   breaking out of the loop (or dropping the stream) never computes or
//!   sleeps the next delay.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::time::{sleep, Sleep};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::backoff::Backoff;

enum State {
    /// Nothing yielded yet.
    Start,
    /// An index was yielded; the next delay has not been computed.
    Idle,
    /// Waiting out the delay before yielding the next index.
    Sleeping(Pin<Box<Sleep>>),
    Done,
}

/// Lazy, cancellable stream of retry attempt indices.
///
/// Created by [`Policy::attempts`](crate::Policy::attempts) or
/// [`Policy::attempts_with`](crate::Policy::attempts_with); consume it with
/// [`StreamExt::next`](futures::StreamExt::next):
///
/// ```rust
/// use std::time::Duration;
/// use futures::StreamExt;
/// use pacer::{ConstantPolicy, Policy};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let policy = ConstantPolicy::new(Duration::from_millis(10)).with_max_retries(3);
///     let mut attempts = policy.attempts();
///     while let Some(i) = attempts.next().await {
///         // run the fallible operation; `break` on success ends the
///         // sequence without sleeping the next delay
///         let _ = i;
///     }
/// }
/// ```
pub struct Attempts {
    engine: Box<dyn Backoff + Send>,
    cancel: Option<CancellationToken>,
    cancelled: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
    index: u64,
    state: State,
}

impl Attempts {
    pub(crate) fn new(engine: Box<dyn Backoff + Send>, cancel: Option<CancellationToken>) -> Self {
        let cancelled = cancel
            .clone()
            .map(|token| Box::pin(token.cancelled_owned()));
        Self {
            engine,
            cancel,
            cancelled,
            index: 0,
            state: State::Start,
        }
    }

    fn finish(&mut self) -> Poll<Option<u64>> {
        self.state = State::Done;
        Poll::Ready(None)
    }
}

impl Stream for Attempts {
    type Item = u64;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<u64>> {
        let this = self.get_mut();
        loop {
            match &mut this.state {
                State::Done => return Poll::Ready(None),
                State::Start => {
                    this.state = State::Idle;
                    return Poll::Ready(Some(0));
                }
                State::Idle => {
                    if this.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
                        return this.finish();
                    }
                    match this.engine.next() {
                        None => return this.finish(),
                        Some(delay) => {
                            this.state = State::Sleeping(Box::pin(sleep(delay)));
                        }
                    }
                }
                State::Sleeping(timer) => {
                    if let Some(cancelled) = this.cancelled.as_mut() {
                        if cancelled.as_mut().poll(cx).is_ready() {
                            return this.finish();
                        }
                    }
                    match timer.as_mut().poll(cx) {
                        Poll::Pending => return Poll::Pending,
                        Poll::Ready(()) => {
                            this.index += 1;
                            let index = this.index;
                            this.state = State::Idle;
                            return Poll::Ready(Some(index));
                        }
                    }
                }
            }
        }
    }
}
