//! Request configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// One complete request description: target, wire options and timing policy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RequestConfig {
    /// Target URL.
    pub url: String,

    /// Wire-level options forwarded to the transport.
    pub options: RequestOptions,

    /// Timing policy for the execution.
    pub policy: CallPolicy,
}

/// Wire-level request options.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RequestOptions {
    /// HTTP method. `None` means the transport default (GET); the success
    /// classifier treats it the same as an explicit GET.
    pub method: Option<String>,

    /// Request headers as name/value pairs.
    pub headers: Vec<(String, String)>,

    /// Optional request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// True when the declared method is anything other than GET
    /// (case-insensitive). An undeclared method counts as GET.
    pub fn is_non_get(&self) -> bool {
        match &self.method {
            Some(method) => !method.eq_ignore_ascii_case("GET"),
            None => false,
        }
    }
}

/// Timing policy for one execution.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CallPolicy {
    /// Milliseconds awaited before dispatching the call.
    pub additional_call_time_ms: u64,

    /// Milliseconds before the in-flight call is aborted.
    pub abort_timeout_ms: u64,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            additional_call_time_ms: 0,
            abort_timeout_ms: 20_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = CallPolicy::default();
        assert_eq!(policy.additional_call_time_ms, 0);
        assert_eq!(policy.abort_timeout_ms, 20_000);
    }

    #[test]
    fn test_minimal_toml_config() {
        let config: RequestConfig = toml::from_str(r#"url = "http://localhost:8080/api""#).unwrap();
        assert_eq!(config.url, "http://localhost:8080/api");
        assert!(config.options.method.is_none());
        assert_eq!(config.policy, CallPolicy::default());
    }

    #[test]
    fn test_full_toml_config() {
        let config: RequestConfig = toml::from_str(
            r#"
            url = "http://localhost:8080/api"

            [options]
            method = "POST"
            headers = [["content-type", "application/json"]]
            body = '{"name":"test"}'

            [policy]
            additional_call_time_ms = 250
            abort_timeout_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.options.method.as_deref(), Some("POST"));
        assert_eq!(config.options.headers.len(), 1);
        assert_eq!(config.policy.abort_timeout_ms, 5000);
    }

    #[test]
    fn test_non_get_detection() {
        let mut options = RequestOptions::default();
        assert!(!options.is_non_get());

        options.method = Some("get".to_string());
        assert!(!options.is_non_get());

        options.method = Some("GET".to_string());
        assert!(!options.is_non_get());

        options.method = Some("POST".to_string());
        assert!(options.is_non_get());

        options.method = Some("delete".to_string());
        assert!(options.is_non_get());
    }
}
