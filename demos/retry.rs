//! Retry a flaky operation with exponential backoff, cancellable via Ctrl-C.
//!
//! Run with: `cargo run --example retry`

use std::time::Duration;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use pacer::{ExponentialPolicy, Policy};

/// Stand-in for a network call that succeeds on the fourth try.
async fn flaky_operation(attempt: u64) -> Result<&'static str, &'static str> {
    if attempt < 3 {
        Err("connection refused")
    } else {
        Ok("connected")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let policy = ExponentialPolicy::default()
        .with_initial_interval(Duration::from_millis(200))
        .with_randomization_factor(0.25)
        .with_max_retries(8);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut attempts = policy.attempts_with(cancel.clone());
    while let Some(i) = attempts.next().await {
        match flaky_operation(i).await {
            Ok(msg) => {
                println!("attempt {i}: {msg}");
                return;
            }
            Err(e) => println!("attempt {i}: {e}, backing off"),
        }
    }

    if cancel.is_cancelled() {
        println!("cancelled by Ctrl-C");
    } else {
        println!("gave up after exhausting retries");
    }
}
