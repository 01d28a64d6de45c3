//! Error taxonomy for the fetch pipeline.

use thiserror::Error;

/// Errors a single execution can surface.
///
/// `Timeout` and `ContentType` are finalized at the raise site: their
/// message is already the one the caller should see, so the failure
/// classifier skips the diagnostic re-fetch for them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The post-delay checkpoint found the abort timer already fired.
    #[error("loading time exceeded; please retry")]
    Timeout,

    /// The abort timer fired while the call was in flight.
    #[error("the fetch was aborted")]
    Aborted,

    /// The response carried a status outside {200, 201}.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    /// A GET response declared no usable content type.
    #[error("request header must declare application/json, text/plain or text/html")]
    ContentType,

    /// The body could not be decoded per its declared content type.
    #[error("could not decode {content_type} body: {reason}")]
    BodyDecode { content_type: String, reason: String },

    /// The underlying call failed before a response existed.
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// True when the failure already carries its final message and the
    /// classifier must not run the diagnostic re-fetch.
    pub fn is_finalized(&self) -> bool {
        matches!(self, FetchError::Timeout | FetchError::ContentType)
    }
}

/// Result type for pipeline operations.
pub type FetchResult<T> = Result<T, FetchError>;
