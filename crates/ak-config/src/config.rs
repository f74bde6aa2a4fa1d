use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, StorageConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full error handling.
    ///
    /// Loading order:
    /// 1. Resolve the config directory (AK_CONFIG_DIR > OS config dir > ./.authkit/)
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AK_CONFIG_DIR env var > OS config dir > ./.authkit/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("AK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        if let Some(base) = dirs::config_dir() {
            return Ok(base.join("authkit"));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".authkit"))
    }

    /// Directory holding the persisted token.
    /// Priority: storage.dir (or AK_STORAGE_DIR) > config dir
    pub fn token_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Self::config_dir(),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs tokens).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout: {}s)",
            self.api.base_url, self.api.timeout_secs
        );

        match &self.storage.dir {
            Some(dir) => info!("  storage: {dir}"),
            None => info!("  storage: <config dir>"),
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("AK_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("AK_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Storage
        Self::apply_env_option_string("AK_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("AK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AK_LOG_FILE", &mut self.logging.file);
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
