use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Auth service base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::api("api.base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(
                "api.base_url must start with http:// or https://",
            ));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be between {MIN_TIMEOUT_SECS} and {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }
}
