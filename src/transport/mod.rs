//! The injectable network-call primitive.
//!
//! # Responsibilities
//! - Issue one request, return one completed response
//! - Reduce the wire response to what the classifiers need
//!
//! # Design Decisions
//! - No retries, no caching, no pooling policy here; the pipeline owns
//!   delay, timeout and the diagnostic re-fetch
//! - Trait seam so tests and embedders can substitute the network

use thiserror::Error;

use crate::config::RequestConfig;

pub mod http;

pub use http::HttpTransport;

/// A completed response reduced to status line, content type and body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// True when the declared content type contains `needle`.
    pub fn content_type_contains(&self, needle: &str) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains(needle))
            .unwrap_or(false)
    }

    /// True for the two success status codes, 200 and 201.
    pub fn is_success_status(&self) -> bool {
        self.status == 200 || self.status == 201
    }
}

/// The call itself failed before a response existed.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Injectable network-call primitive.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Issue the request once and return the completed response.
    async fn send(&self, request: &RequestConfig) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: Option<&str>, status: u16) -> RawResponse {
        RawResponse {
            status,
            status_text: String::new(),
            content_type: content_type.map(str::to_string),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_content_type_matching() {
        let r = response(Some("application/json; charset=utf-8"), 200);
        assert!(r.content_type_contains("application/json"));
        assert!(!r.content_type_contains("text/plain"));

        let r = response(None, 200);
        assert!(!r.content_type_contains("application/json"));
    }

    #[test]
    fn test_success_status_codes() {
        assert!(response(None, 200).is_success_status());
        assert!(response(None, 201).is_success_status());
        assert!(!response(None, 204).is_success_status());
        assert!(!response(None, 404).is_success_status());
    }
}
