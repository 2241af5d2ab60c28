mod auth_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod recognition_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::{CONFIG_DIR_ENV, Config};
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use recognition_config::RecognitionConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "*";
const DEFAULT_DATABASE_FILENAME: &str = "faceattend.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TOKEN_FILENAME: &str = "token";

#[cfg(test)]
mod tests;
