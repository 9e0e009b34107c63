//! Provider error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching from the recipe provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API key not available: {0}")]
    MissingApiKey(String),
}

impl ProviderError {
    /// Check if re-issuing the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::RateLimited { .. } => true,
            ProviderError::ApiError { status, .. } => *status >= 500 || *status == 408,
            ProviderError::Network(_) => true,
            ProviderError::InvalidResponse(_) => false,
            ProviderError::Json(_) => false,
            ProviderError::MissingApiKey(_) => false,
        }
    }

    /// Get the retry duration if this is a rate limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ProviderError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable() {
        // 5xx errors should be retryable
        assert!(
            ProviderError::ApiError {
                status: 503,
                message: "Unavailable".to_string()
            }
            .is_retryable()
        );

        // Quota exhausted (402) and bad requests are not
        assert!(
            !ProviderError::ApiError {
                status: 402,
                message: "Daily points limit reached".to_string()
            }
            .is_retryable()
        );
        assert!(
            !ProviderError::ApiError {
                status: 400,
                message: "Bad request".to_string()
            }
            .is_retryable()
        );

        assert!(!ProviderError::InvalidResponse("Bad JSON".to_string()).is_retryable());
        assert!(!ProviderError::MissingApiKey("unset".to_string()).is_retryable());
    }

    #[test]
    fn test_retry_after() {
        let err = ProviderError::RateLimited {
            retry_after: Duration::from_secs(42),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(42)));
        assert_eq!(ProviderError::InvalidResponse("x".to_string()).retry_after(), None);
    }
}
