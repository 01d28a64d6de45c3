//! Lifecycle state and the observer seam.
//!
//! # Data Flow
//! ```text
//! executor transition:
//!     → LifecycleState value built from the outcome
//!     → FetchObserver::on_transition (presentation layer)
//!     → StateSnapshot flattens the state into renderable flags
//! ```
//!
//! # Design Decisions
//! - State is a value type owned per-invocation by the executor; the
//!   observer keeps whatever copy it wants (last terminal write wins)
//! - Transitions are monotonic within one execution: Loading, then
//!   exactly one of Success or Error

use serde_json::Value;

/// The three shapes a successful outcome can take.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body decoded as `application/json`.
    Json(Value),
    /// Body decoded as `text/plain` or `text/html`.
    Text(String),
    /// Non-GET call with no decodable body; fixed acknowledgement text.
    Acknowledged(String),
}

/// Finalized failure description handed to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDescriptor {
    /// Non-empty human-readable summary.
    pub message: String,
    /// Raw classified error body, when one was obtainable.
    pub errors: Option<Value>,
}

/// Lifecycle of one execution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Loading,
    Success(Payload),
    Error(ErrorDescriptor),
}

impl LifecycleState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Success(_) | LifecycleState::Error(_))
    }

    /// True when `next` is a legal transition. A new execution may begin
    /// from any state (overwriting a prior terminal state), but within one
    /// execution only Loading → Success/Error is allowed.
    pub fn can_advance_to(&self, next: &LifecycleState) -> bool {
        match (self, next) {
            (LifecycleState::Loading, LifecycleState::Loading) => false,
            (_, LifecycleState::Loading) => true,
            (LifecycleState::Loading, LifecycleState::Success(_)) => true,
            (LifecycleState::Loading, LifecycleState::Error(_)) => true,
            _ => false,
        }
    }

    /// Flatten into the flags an observer renders from.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        match self {
            LifecycleState::Idle => StateSnapshot::default(),
            LifecycleState::Loading => StateSnapshot {
                loading: true,
                ..StateSnapshot::default()
            },
            LifecycleState::Success(payload) => StateSnapshot {
                success: true,
                data: Some(payload),
                ..StateSnapshot::default()
            },
            LifecycleState::Error(descriptor) => StateSnapshot {
                error: true,
                error_message: Some(&descriptor.message),
                error_body: descriptor.errors.as_ref(),
                ..StateSnapshot::default()
            },
        }
    }
}

/// Observer-facing view of a [`LifecycleState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StateSnapshot<'a> {
    pub loading: bool,
    pub success: bool,
    pub error: bool,
    pub data: Option<&'a Payload>,
    pub error_message: Option<&'a str>,
    pub error_body: Option<&'a Value>,
}

/// Receives lifecycle notifications at each state transition. Implemented
/// by the presentation layer; the executor never inspects the receiver.
pub trait FetchObserver: Send + Sync {
    fn on_transition(&self, state: &LifecycleState);
}

/// Observer that drops every notification.
#[derive(Debug, Default)]
pub struct NullObserver;

impl FetchObserver for NullObserver {
    fn on_transition(&self, _state: &LifecycleState) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loading_snapshot_flags() {
        let snapshot = LifecycleState::Loading.snapshot();
        assert!(snapshot.loading);
        assert!(!snapshot.success);
        assert!(!snapshot.error);
        assert!(snapshot.data.is_none());
    }

    #[test]
    fn test_success_snapshot_carries_data() {
        let state = LifecycleState::Success(Payload::Json(json!({"a": 1})));
        let snapshot = state.snapshot();
        assert!(snapshot.success);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.data, Some(&Payload::Json(json!({"a": 1}))));
    }

    #[test]
    fn test_error_snapshot_carries_descriptor() {
        let state = LifecycleState::Error(ErrorDescriptor {
            message: "Not able to fetch data. Error status: 404 Not Found.".to_string(),
            errors: Some(json!({})),
        });
        let snapshot = state.snapshot();
        assert!(snapshot.error);
        assert_eq!(
            snapshot.error_message,
            Some("Not able to fetch data. Error status: 404 Not Found.")
        );
        assert_eq!(snapshot.error_body, Some(&json!({})));
    }

    #[test]
    fn test_transitions_are_monotonic() {
        let idle = LifecycleState::Idle;
        let loading = LifecycleState::Loading;
        let success = LifecycleState::Success(Payload::Text("ok".to_string()));
        let error = LifecycleState::Error(ErrorDescriptor {
            message: "the fetch was aborted".to_string(),
            errors: None,
        });

        assert!(idle.can_advance_to(&loading));
        assert!(loading.can_advance_to(&success));
        assert!(loading.can_advance_to(&error));

        // No backward transitions within one execution.
        assert!(!success.can_advance_to(&error));
        assert!(!error.can_advance_to(&success));
        assert!(!idle.can_advance_to(&success));

        // A new execution overwrites a prior terminal state.
        assert!(success.can_advance_to(&loading));
        assert!(error.can_advance_to(&loading));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!LifecycleState::Idle.is_terminal());
        assert!(!LifecycleState::Loading.is_terminal());
        assert!(LifecycleState::Success(Payload::Text(String::new())).is_terminal());
    }
}
