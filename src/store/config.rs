//! Store Configuration
//!
//! Connection settings for the hosted row service. Constructed explicitly
//! by the host and passed into the store client; the environment fallback
//! exists for hosts that configure through the process environment.

use std::env;

use crate::domain::{StoreError, StoreResult};

/// Environment variable holding the service base URL
pub const URL_ENV: &str = "TABI_SUPABASE_URL";
/// Environment variable holding the anonymous API key
pub const KEY_ENV: &str = "TABI_SUPABASE_ANON_KEY";

/// Connection settings for the hosted row service
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Read connection settings from the process environment
    pub fn from_env() -> StoreResult<Self> {
        let base_url = env::var(URL_ENV)
            .map_err(|_| StoreError::Unavailable(format!("{} is not set", URL_ENV)))?;
        let api_key = env::var(KEY_ENV)
            .map_err(|_| StoreError::Unavailable(format!("{} is not set", KEY_ENV)))?;
        Ok(Self::new(base_url, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = StoreConfig::new("https://example.supabase.co//", "anon-key");
        assert_eq!(config.base_url, "https://example.supabase.co");
    }
}
