mod auth_config;
mod config;
mod demo_config;
mod error;
mod log_level;
mod logging_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use demo_config::DemoConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "CM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".clinic";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_DEMO_DOMAIN: &str = "clinica.com";
const DEFAULT_DEMO_PASSWORD: &str = "demo123";
const DEFAULT_SEED_ACCOUNTS: bool = true;
const MIN_PASSWORD_LENGTH: usize = 6;

const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;
const MIN_MAX_FAILED_ATTEMPTS: u32 = 1;
const MAX_MAX_FAILED_ATTEMPTS: u32 = 100;

#[cfg(test)]
mod tests;
