use crate::{
    AuthConfig, ClientConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    RateLimitConfig, RecognitionConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "FA_CONFIG_DIR";

const DEFAULT_CONFIG_DIR_NAME: &str = ".faceattend";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub recognition: RecognitionConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for FA_CONFIG_DIR env var, else use ./.faceattend/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply FA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() (server) or validate_client() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FA_CONFIG_DIR env var > ./.faceattend/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate everything the server needs.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.recognition.validate()?;

        // Database path must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty()
            || db_path.is_absolute()
            || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Validate only what the CLI client reads
    pub fn validate_client(&self) -> ConfigErrorResult<()> {
        self.client.validate()
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the client's token file.
    pub fn token_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.token_file))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors: {})",
            self.server.host, self.server.port, self.server.cors_origin
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 ({}), ttl={}m",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            },
            self.auth.token_ttl_minutes
        );
        info!(
            "  rate_limit: login {}/{}s",
            self.rate_limit.login_max_requests, self.rate_limit.login_window_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  recognition: match={}, detect={}, iou={}, dim={}",
            self.recognition.match_threshold,
            self.recognition.face_detection_threshold,
            self.recognition.nms_iou_threshold,
            self.recognition.embedding_dim
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("FA_SERVER_CORS_ORIGIN", &mut self.server.cors_origin);

        // Database
        Self::apply_env_string("FA_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("FA_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "FA_AUTH_TOKEN_TTL_MINUTES",
            &mut self.auth.token_ttl_minutes,
        );

        // Rate limit
        Self::apply_env_parse(
            "FA_RATE_LIMIT_LOGIN_MAX_REQUESTS",
            &mut self.rate_limit.login_max_requests,
        );
        Self::apply_env_parse(
            "FA_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Logging
        Self::apply_env_parse("FA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FA_LOG_FILE", &mut self.logging.file);

        // Recognition
        Self::apply_env_parse(
            "FA_RECOGNITION_MATCH_THRESHOLD",
            &mut self.recognition.match_threshold,
        );
        Self::apply_env_parse(
            "FA_RECOGNITION_FACE_DETECTION_THRESHOLD",
            &mut self.recognition.face_detection_threshold,
        );
        Self::apply_env_parse(
            "FA_RECOGNITION_NMS_IOU_THRESHOLD",
            &mut self.recognition.nms_iou_threshold,
        );
        Self::apply_env_parse(
            "FA_RECOGNITION_EMBEDDING_DIM",
            &mut self.recognition.embedding_dim,
        );

        // Client; the frontend's variable wins over ours
        Self::apply_env_string("FA_API_BASE_URL", &mut self.client.api_base_url);
        Self::apply_env_string("NEXT_PUBLIC_API_BASE_URL", &mut self.client.api_base_url);
        Self::apply_env_string("FA_CLIENT_TOKEN_FILE", &mut self.client.token_file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
