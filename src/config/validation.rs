//! Request configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the URL parses and headers are well formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RequestConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::RequestConfig;

/// A single semantic problem with a [`RequestConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUrl,
    InvalidUrl { url: String, reason: String },
    EmptyHeaderName { index: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyUrl => write!(f, "url must not be empty"),
            ValidationError::InvalidUrl { url, reason } => {
                write!(f, "invalid url '{}': {}", url, reason)
            }
            ValidationError::EmptyHeaderName { index } => {
                write!(f, "header {} has an empty name", index)
            }
        }
    }
}

/// Validate a request config, collecting every problem found.
pub fn validate_request(config: &RequestConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.url.trim().is_empty() {
        errors.push(ValidationError::EmptyUrl);
    } else if let Err(e) = url::Url::parse(&config.url) {
        errors.push(ValidationError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        });
    }

    for (index, (name, _)) in config.options.headers.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyHeaderName { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RequestOptions;

    #[test]
    fn test_valid_config_passes() {
        let config = RequestConfig {
            url: "http://localhost:8080/api".to_string(),
            ..RequestConfig::default()
        };
        assert!(validate_request(&config).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = RequestConfig::default();
        let errors = validate_request(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyUrl]);
    }

    #[test]
    fn test_all_errors_collected() {
        let config = RequestConfig {
            url: "not a url".to_string(),
            options: RequestOptions {
                headers: vec![
                    ("".to_string(), "value".to_string()),
                    ("accept".to_string(), "application/json".to_string()),
                ],
                ..RequestOptions::default()
            },
            ..RequestConfig::default()
        };
        let errors = validate_request(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::InvalidUrl { .. }));
        assert_eq!(errors[1], ValidationError::EmptyHeaderName { index: 0 });
    }
}
