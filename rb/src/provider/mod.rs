//! Recipe provider module for RecipeBox
//!
//! The external data source the application consumes: trending recipes,
//! recipe search, recipe detail, and product search.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod spoonacular;
mod types;

pub use client::RecipeProvider;
pub use error::ProviderError;
pub use spoonacular::SpoonacularClient;
pub use types::{DEFAULT_RESULTS, DEFAULT_TRENDING, RecipeQuery};

use crate::config::ProviderConfig;

/// Create a provider client based on the name in config
///
/// Supports "spoonacular".
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn RecipeProvider>, ProviderError> {
    debug!(provider = %config.provider, "create_provider: called");
    match config.provider.as_str() {
        "spoonacular" => Ok(Arc::new(SpoonacularClient::from_config(config)?)),
        other => {
            debug!(provider = %other, "create_provider: unknown provider");
            Err(ProviderError::InvalidResponse(format!(
                "Unknown recipe provider: '{}'. Supported: spoonacular",
                other
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_create_provider_unknown_name() {
        let config = ProviderConfig {
            provider: "edamam".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(err.to_string().contains("edamam"));
    }

    #[test]
    #[serial]
    fn test_create_provider_missing_key() {
        let config = ProviderConfig {
            api_key_env: "RECIPEBOX_TEST_KEY_MISSING".to_string(),
            ..Default::default()
        };
        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::remove_var("RECIPEBOX_TEST_KEY_MISSING") };
        assert!(matches!(create_provider(&config), Err(ProviderError::MissingApiKey(_))));
    }

    #[test]
    #[serial]
    fn test_create_provider_spoonacular() {
        let config = ProviderConfig {
            api_key_env: "RECIPEBOX_TEST_KEY_PRESENT".to_string(),
            ..Default::default()
        };
        unsafe { std::env::set_var("RECIPEBOX_TEST_KEY_PRESENT", "abc") };
        assert!(create_provider(&config).is_ok());
        unsafe { std::env::remove_var("RECIPEBOX_TEST_KEY_PRESENT") };
    }
}
