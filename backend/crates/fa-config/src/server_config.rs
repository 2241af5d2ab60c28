use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed browser origin; "*" allows any
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origin: String::from(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if self.cors_origin.trim().is_empty() {
            return Err(ConfigError::server(
                "server.cors_origin cannot be empty (use \"*\" to allow any origin)",
            ));
        }

        Ok(())
    }
}
