//! Cancellation timer.
//!
//! One timer per invocation, never reused. Arming spawns a task that
//! flips a watch signal when the timeout elapses; disarming aborts the
//! task. A disarmed timer never fires, even if already due.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// One-shot cancellation timer with a queryable fired signal.
pub struct AbortTimer {
    fired: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl AbortTimer {
    /// Arm a timer that fires once after `ms` milliseconds.
    pub fn arm(ms: u64) -> Self {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            let _ = tx.send(true);
        });
        Self { fired: rx, task }
    }

    /// True once the timer has fired.
    pub fn is_fired(&self) -> bool {
        *self.fired.borrow()
    }

    /// Resolves when the timer fires; pends forever once disarmed. Only
    /// meaningful inside a `select!` against the guarded operation.
    pub async fn fired(&mut self) {
        if self.fired.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Disarm the timer. Idempotent.
    pub fn disarm(&self) {
        self.task.abort();
    }
}

impl Drop for AbortTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
