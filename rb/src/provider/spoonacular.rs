//! Spoonacular API client implementation
//!
//! Implements the RecipeProvider trait over the Spoonacular REST API.
//! The API key travels as the `apiKey` query parameter.

use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::{RandomRecipesResponse, SearchProductsResponse, SearchRecipesResponse};
use super::{ProviderError, RecipeProvider, RecipeQuery};
use crate::config::ProviderConfig;
use crate::domain::{ProductSummary, Recipe, RecipeSummary};

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 500;

/// Upper bound on a single backoff delay
const MAX_BACKOFF_MS: u64 = 30_000;

/// Delay before retry number `attempt` (1-based), doubling up to the cap
fn backoff_ms(attempt: u32) -> u64 {
    2u64.saturating_pow(attempt.saturating_sub(1))
        .saturating_mul(INITIAL_BACKOFF_MS)
        .min(MAX_BACKOFF_MS)
}

/// Check if an HTTP status code is worth retrying
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 500 | 502 | 503 | 504)
}

/// Error body the API sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pull a readable message out of an error response body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Spoonacular API client
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    http: Client,
    max_retries: u32,
}

impl SpoonacularClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        debug!(base_url = %config.base_url, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| ProviderError::MissingApiKey(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("recipebox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            max_retries: config.max_retries,
        })
    }

    /// Create a client with an explicit key and base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
            max_retries: 0,
        }
    }

    /// Build a GET request for `path` with query parameters and the key
    fn build_request(&self, path: &str, params: &[(&str, String)]) -> Result<Request, ProviderError> {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .build()
            .map_err(ProviderError::Network)
    }

    /// GET and decode JSON, retrying transient failures
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ProviderError> {
        debug!(%path, "get_json: called");

        let mut last_error = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff = backoff_ms(attempt);
                warn!(attempt, backoff_ms = backoff, %path, "get_json: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let request = self.build_request(path, params)?;
            let response = match self.http.execute(request).await {
                Ok(r) => r,
                Err(e) => {
                    debug!(attempt, error = %e, "get_json: network error");
                    last_error = Some(ProviderError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                debug!("get_json: rate limited (429)");
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(60);

                return Err(ProviderError::RateLimited {
                    retry_after: Duration::from_secs(retry_after),
                });
            }

            if is_retryable_status(status) && attempt < self.max_retries {
                let text = response.text().await.unwrap_or_default();
                debug!(attempt, status, "get_json: retryable error");
                last_error = Some(ProviderError::ApiError {
                    status,
                    message: error_message(&text),
                });
                continue;
            }

            if !response.status().is_success() {
                let text = response.text().await.unwrap_or_default();
                debug!(status, "get_json: API error");
                return Err(ProviderError::ApiError {
                    status,
                    message: error_message(&text),
                });
            }

            let body = response.text().await?;
            debug!(body_len = body.len(), "get_json: response received");
            return Ok(serde_json::from_str(&body)?);
        }

        Err(last_error.unwrap_or_else(|| ProviderError::InvalidResponse("No attempts made".to_string())))
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn trending(&self, count: u32) -> Result<Vec<RecipeSummary>, ProviderError> {
        debug!(count, "trending: called");
        let response: RandomRecipesResponse = self
            .get_json("/recipes/random", &[("number", count.to_string())])
            .await?;
        Ok(response.recipes)
    }

    async fn search_recipes(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>, ProviderError> {
        debug!(?query, "search_recipes: called");
        let response: SearchRecipesResponse = self.get_json("/recipes/complexSearch", &query.to_params()).await?;
        Ok(response.results)
    }

    async fn recipe_details(&self, id: u64) -> Result<Recipe, ProviderError> {
        debug!(id, "recipe_details: called");
        self.get_json(
            &format!("/recipes/{}/information", id),
            &[("includeNutrition", "true".to_string())],
        )
        .await
    }

    async fn search_products(&self, query: &str, number: u32) -> Result<Vec<ProductSummary>, ProviderError> {
        debug!(%query, number, "search_products: called");
        let response: SearchProductsResponse = self
            .get_json(
                "/food/products/search",
                &[("query", query.to_string()), ("number", number.to_string())],
            )
            .await?;
        Ok(response.products)
    }
}
