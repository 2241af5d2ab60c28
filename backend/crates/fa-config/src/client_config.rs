use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_FILENAME};

use serde::Deserialize;

/// Settings for the `fa` command-line client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Token file name, relative to the config directory
    pub token_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            token_file: String::from(DEFAULT_TOKEN_FILENAME),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::client(format!(
                "client.api_base_url must start with http:// or https://, got {}",
                self.api_base_url
            )));
        }

        if self.token_file.is_empty() || self.token_file.contains("..") {
            return Err(ConfigError::client(
                "client.token_file must be a non-empty relative name without '..'",
            ));
        }

        Ok(())
    }
}
