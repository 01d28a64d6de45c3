//! Success-path response classification.
//!
//! Content-type sniffing picks the decode strategy: JSON, text, or a
//! fixed acknowledgement for non-GET calls with an undeclared body shape.

use crate::config::RequestOptions;
use crate::error::FetchError;
use crate::state::Payload;
use crate::transport::RawResponse;

/// Payload text for a non-GET call whose response carries no decodable
/// content type.
pub const ACKNOWLEDGED: &str = "Your request was processed successfully.";

/// Decode a response with status 200 or 201 into a [`Payload`].
///
/// A GET response with an unrecognized content type is a contract
/// violation, not a success; the resulting error is finalized.
pub fn classify_success(
    options: &RequestOptions,
    response: RawResponse,
) -> Result<Payload, FetchError> {
    if response.content_type_contains("application/json") {
        let value = serde_json::from_slice(&response.body).map_err(|e| FetchError::BodyDecode {
            content_type: "application/json".to_string(),
            reason: e.to_string(),
        })?;
        return Ok(Payload::Json(value));
    }

    if response.content_type_contains("text/plain") || response.content_type_contains("text/html") {
        let text = String::from_utf8(response.body).map_err(|e| FetchError::BodyDecode {
            content_type: "text".to_string(),
            reason: e.to_string(),
        })?;
        return Ok(Payload::Text(text));
    }

    if options.is_non_get() {
        return Ok(Payload::Acknowledged(ACKNOWLEDGED.to_string()));
    }

    Err(FetchError::ContentType)
}
