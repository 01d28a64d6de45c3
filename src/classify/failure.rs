//! Failure-path classification.
//!
//! Builds the final [`ErrorDescriptor`] for a failed execution. Except
//! for an abort and the timeout checkpoint (which never dispatched the
//! call), the request is re-issued once (the diagnostic re-fetch) purely
//! to obtain an error body; finalized errors keep their message, so for
//! them the body is fetched but not classified.
//!
//! The diagnostic re-fetch is not bounded by the abort timer and runs
//! even for non-idempotent methods.

use serde_json::Value;

use crate::config::RequestConfig;
use crate::error::FetchError;
use crate::state::ErrorDescriptor;
use crate::transport::Transport;

/// Classify `err` into a finalized [`ErrorDescriptor`].
///
/// Never fails: an unreachable, non-JSON or unparseable diagnostic body
/// degrades to `errors = None`.
pub async fn classify_failure<T: Transport>(
    transport: &T,
    request: &RequestConfig,
    err: &FetchError,
) -> ErrorDescriptor {
    if matches!(err, FetchError::Aborted) {
        let message = err.to_string();
        return ErrorDescriptor {
            message: message.clone(),
            errors: Some(Value::String(message)),
        };
    }

    // The timeout checkpoint never dispatched the call; it is the one
    // non-abort failure that skips the diagnostic re-fetch.
    if matches!(err, FetchError::Timeout) {
        return without_body(err);
    }

    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(error = %e, "diagnostic re-fetch failed; no error body");
            return without_body(err);
        }
    };

    // Finalized errors keep their message; the diagnostic body is fetched
    // but not classified.
    if err.is_finalized() || !response.content_type_contains("application/json") {
        return without_body(err);
    }

    let collected: Value = match serde_json::from_slice(&response.body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "diagnostic body is not valid JSON");
            return without_body(err);
        }
    };

    let message = match &collected {
        Value::String(s) => format!("Not able to fetch data. Error status: {err}. {s}"),
        Value::Array(items) => format!(
            "Not able to fetch data. Error status: {err}. {}",
            join_values(items)
        ),
        Value::Object(map) if map.is_empty() => {
            // No keys to report; fall back to the diagnostic status code.
            format!("Not able to fetch data. Error status: {}.", response.status)
        }
        Value::Object(map) => {
            // Scan values in insertion order; the first nested value stops
            // the scan, nested shapes are not stringified.
            if map.values().any(|v| v.is_array() || v.is_object()) {
                format!("Not able to fetch data. Error status: {err}")
            } else {
                format!(
                    "Not able to fetch data. Error status: {err}. {}",
                    join_values(map.values())
                )
            }
        }
        _ => format!("Not able to fetch data. Error status: {err}."),
    };

    ErrorDescriptor {
        message,
        errors: Some(collected),
    }
}

fn without_body(err: &FetchError) -> ErrorDescriptor {
    ErrorDescriptor {
        message: format!("Not able to fetch data. Error status: {err}"),
        errors: None,
    }
}

fn join_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .map(render_value)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // Joining renders null as an empty slot, not the literal "null".
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
