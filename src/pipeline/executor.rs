//! The request executor state machine.
//!
//! # Data Flow
//! ```text
//! execute()
//!     → Loading notified
//!     → AbortTimer armed, delay gate awaited (concurrent)
//!     → post-delay checkpoint: timer fired? → Timeout, no dispatch
//!     → transport.send() raced against the timer → Aborted mid-flight
//!     → status ∉ {200, 201} → Status error
//!     → classify::success | classify::failure (diagnostic re-fetch)
//!     → Success/Error notified; timer disarmed on every path
//! ```
//!
//! # Design Decisions
//! - Each invocation owns a fresh timer and signal; concurrent calls on
//!   one executor do not interfere (observer sees last terminal write)
//! - The original error is re-raised to the caller after the descriptor
//!   is finalized; the caller never re-classifies

use std::sync::Arc;

use tracing::Instrument;

use crate::classify;
use crate::config::{CallPolicy, RequestConfig, RequestOptions};
use crate::error::{FetchError, FetchResult};
use crate::state::{FetchObserver, LifecycleState, NullObserver, Payload};
use crate::timing::{self, AbortTimer};
use crate::transport::Transport;

/// Executes single requests through the delay/timeout/classification
/// pipeline.
pub struct FetchExecutor<T: Transport> {
    transport: T,
    observer: Arc<dyn FetchObserver>,
}

impl<T: Transport> FetchExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self::with_observer(transport, Arc::new(NullObserver))
    }

    pub fn with_observer(transport: T, observer: Arc<dyn FetchObserver>) -> Self {
        Self {
            transport,
            observer,
        }
    }

    /// Execute one request described piecewise.
    pub async fn execute(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
        policy: CallPolicy,
    ) -> FetchResult<Payload> {
        let config = RequestConfig {
            url: url.into(),
            options,
            policy,
        };
        self.execute_config(&config).await
    }

    /// Execute one request. On failure the finalized descriptor reaches
    /// the observer before the original error is returned.
    pub async fn execute_config(&self, config: &RequestConfig) -> FetchResult<Payload> {
        let span = tracing::info_span!(
            "fetch",
            request_id = %uuid::Uuid::new_v4(),
            url = %config.url,
        );
        self.run(config).instrument(span).await
    }

    async fn run(&self, config: &RequestConfig) -> FetchResult<Payload> {
        let mut state = LifecycleState::Idle;
        self.transition(&mut state, LifecycleState::Loading);

        let mut timer = AbortTimer::arm(config.policy.abort_timeout_ms);
        timing::await_delay(config.policy.additional_call_time_ms).await;

        // Post-delay checkpoint: the timer may have won the race while the
        // delay gate was pending.
        if timer.is_fired() {
            timer.disarm();
            tracing::warn!(
                abort_timeout_ms = config.policy.abort_timeout_ms,
                additional_call_time_ms = config.policy.additional_call_time_ms,
                "abort timer fired before dispatch"
            );
            return self.fail(&mut state, config, FetchError::Timeout).await;
        }

        let outcome = tokio::select! {
            outcome = self.transport.send(config) => Some(outcome),
            _ = timer.fired() => None,
        };
        timer.disarm();

        let response = match outcome {
            None => {
                tracing::warn!("abort timer fired mid-flight");
                return self.fail(&mut state, config, FetchError::Aborted).await;
            }
            Some(Ok(response)) => response,
            Some(Err(e)) => {
                return self
                    .fail(&mut state, config, FetchError::Transport(e.to_string()))
                    .await
            }
        };

        if !response.is_success_status() {
            let err = FetchError::Status {
                status: response.status,
                status_text: response.status_text.clone(),
            };
            return self.fail(&mut state, config, err).await;
        }

        match classify::classify_success(&config.options, response) {
            Ok(payload) => {
                tracing::debug!("request succeeded");
                self.transition(&mut state, LifecycleState::Success(payload.clone()));
                Ok(payload)
            }
            Err(err) => self.fail(&mut state, config, err).await,
        }
    }

    /// Finalize a descriptor for `err`, notify the observer, re-raise.
    async fn fail(
        &self,
        state: &mut LifecycleState,
        config: &RequestConfig,
        err: FetchError,
    ) -> FetchResult<Payload> {
        let descriptor = classify::classify_failure(&self.transport, config, &err).await;
        tracing::debug!(message = %descriptor.message, "request failed");
        self.transition(state, LifecycleState::Error(descriptor));
        Err(err)
    }

    fn transition(&self, current: &mut LifecycleState, next: LifecycleState) {
        debug_assert!(
            current.can_advance_to(&next),
            "illegal lifecycle transition: {:?} -> {:?}",
            current,
            next
        );
        self.observer.on_transition(&next);
        *current = next;
    }
}
