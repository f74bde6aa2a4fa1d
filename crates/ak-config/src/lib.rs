mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

#[cfg(test)]
mod tests;
