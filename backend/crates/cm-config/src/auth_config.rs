use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_FAILED_ATTEMPTS, MAX_MAX_FAILED_ATTEMPTS,
    MIN_MAX_FAILED_ATTEMPTS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Consecutive wrong passwords before an address is locked out
    pub max_failed_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_failed_attempts < MIN_MAX_FAILED_ATTEMPTS
            || self.max_failed_attempts > MAX_MAX_FAILED_ATTEMPTS
        {
            return Err(ConfigError::auth(format!(
                "auth.max_failed_attempts must be {}-{}, got {}",
                MIN_MAX_FAILED_ATTEMPTS, MAX_MAX_FAILED_ATTEMPTS, self.max_failed_attempts
            )));
        }

        Ok(())
    }
}
