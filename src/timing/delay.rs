//! Pre-dispatch delay gate.

use std::time::Duration;

/// Resolve after `ms` milliseconds. Zero yields to the scheduler once
/// instead of sleeping. Never fails.
pub async fn await_delay(ms: u64) {
    if ms == 0 {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
