//! # pacer
//!
//! **Pacer** decides *when* to retry, never *what*: policies turn into lazy
//! sequences of retry timings, and the caller drives its own operation
//! between yields. No circuit breaking, no error classification, no metrics —
//! a configuration-driven generator of timing decisions.
//!
//! ## Architecture
//! ```text
//!  ConstantPolicy            ExponentialPolicy
//!  (interval, max_retries)   (initial, rf, multiplier, max_interval,
//!        │                    max_elapsed, stop_after, clock, max_retries)
//!        └────────────┬──────────────┘
//!                     ▼
//!             Policy::build()               ── fresh engine per iteration
//!                     ▼
//!          Box<dyn Backoff>  ◄── LimitedBackoff caps attempts when set
//!          Stop / Zero / Fixed / Exponential
//!             ┌───────┴────────┐
//!             ▼                ▼
//!         Attempts         Durations
//!   (Stream of indices;  (Iterator of (index, delay);
//!    sleeps internally,   never blocks, caller owns
//!    CancellationToken    the waiting)
//!    aborts the sleep)
//! ```
//!
//! ## Features
//! | Area          | Description                                              | Key types                                  |
//! |---------------|----------------------------------------------------------|--------------------------------------------|
//! | **Policies**  | Immutable, reusable sequence factories.                  | [`ConstantPolicy`], [`ExponentialPolicy`]  |
//! | **Engines**   | Stateful delay generators, one per iteration.            | [`Backoff`], [`ExponentialBackoff`]        |
//! | **Sequences** | The two consumption modes.                               | [`Attempts`], [`Durations`]                |
//! | **Clock**     | Time source override for deterministic tests.            | [`Clock`], [`SystemClock`]                 |
//!
//! Stopping is never an error: a sequence that runs out of retries, hits its
//! time budget, or gets cancelled simply ends. If the caller needs to tell
//! those apart, it checks its own token after the loop.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use futures::StreamExt;
//! use tokio_util::sync::CancellationToken;
//! use pacer::{ExponentialPolicy, Policy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let policy = ExponentialPolicy::default()
//!         .with_initial_interval(Duration::from_millis(10))
//!         .with_max_retries(3);
//!
//!     let cancel = CancellationToken::new();
//!     let mut attempts = policy.attempts_with(cancel.clone());
//!     while let Some(i) = attempts.next().await {
//!         println!("attempt {i}");
//!         // run the fallible operation here; `break` on success
//!     }
//! }
//! ```

mod backoff;
mod clock;
mod iter;
mod policies;

// ---- Public re-exports ----

pub use backoff::{
    Backoff, ExponentialBackoff, FixedBackoff, LimitedBackoff, StopBackoff, ZeroBackoff,
};
pub use clock::{Clock, SystemClock};
pub use iter::{Attempts, Durations};
pub use policies::{ConstantPolicy, ExponentialPolicy, Policy};
