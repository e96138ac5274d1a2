use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use serde::Deserialize;

/// Where the backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to, e.g. "http://localhost:8000"
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        if url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        // The HTTP client is built without TLS support
        if url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url must use http://, TLS is not supported, got {}",
                self.base_url
            )));
        }

        if !url.starts_with("http://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http://, got {}",
                self.base_url
            )));
        }

        if url.chars().any(char::is_whitespace) {
            return Err(ConfigError::api(format!(
                "api.base_url must not contain whitespace, got {:?}",
                self.base_url
            )));
        }

        Ok(())
    }
}
