//! Result/empty/failure states for list views

use tracing::warn;

use crate::provider::ProviderError;

/// What a list view shows after a fetch completes
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    Empty,
    Failed { message: String },
}

impl<T> FetchOutcome<T> {
    /// Convert a provider result, absorbing any failure
    pub fn from_result(result: Result<Vec<T>, ProviderError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchOutcome::Empty,
            Ok(items) => FetchOutcome::Loaded(items),
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "from_result: fetch failed");
                FetchOutcome::Failed {
                    message: failure_message(&e),
                }
            }
        }
    }

    /// Items to render; empty unless loaded
    pub fn into_items(self) -> Vec<T> {
        match self {
            FetchOutcome::Loaded(items) => items,
            FetchOutcome::Empty | FetchOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            FetchOutcome::Loaded(items) => items,
            _ => &[],
        }
    }

    /// True when the view should invite the user to retry
    pub fn is_retryable_state(&self) -> bool {
        !matches!(self, FetchOutcome::Loaded(_))
    }

    /// Status line for the non-loaded states
    pub fn status_message(&self) -> Option<String> {
        match self {
            FetchOutcome::Loaded(_) => None,
            FetchOutcome::Empty => Some("No results found. Try a different search.".to_string()),
            FetchOutcome::Failed { message } => Some(message.clone()),
        }
    }
}

fn failure_message(error: &ProviderError) -> String {
    if let Some(wait) = error.retry_after() {
        return format!("No results right now (rate limited). Try again in {}s.", wait.as_secs());
    }
    match error {
        ProviderError::MissingApiKey(_) => "No results: the recipe provider API key is not configured.".to_string(),
        _ => "No results right now. Please try again.".to_string(),
    }
}
