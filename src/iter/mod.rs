//! Lazy retry sequences: the two consumption modes over one engine.
//!
//! Both sequences are thin adapters over a [`Backoff`](crate::Backoff)
//! engine, so the delay arithmetic lives in exactly one place:
//!
//! - [`Attempts`] — async stream of attempt indices `0, 1, 2, …` that sleeps
//!   internally between yields and honors an external
//!   [`CancellationToken`](tokio_util::sync::CancellationToken);
//! - [`Durations`] — plain iterator of `(index, delay)` pairs that never
//!   blocks; the caller owns the waiting (and any cancellation of it).

mod attempts;
mod durations;

pub use attempts::Attempts;
pub use durations::Durations;
