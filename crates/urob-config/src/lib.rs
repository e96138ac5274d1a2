mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV_VAR: &str = "UROB_API_URL";
pub const CONFIG_DIR_ENV_VAR: &str = "UROB_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".urob";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
