use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEMO_DOMAIN, DEFAULT_DEMO_PASSWORD,
    DEFAULT_SEED_ACCOUNTS, MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

/// Demo accounts offered on the login screen.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Domain of `admin@`, `adminmedico@` and `medico@`
    pub domain: String,
    /// Password the in-memory provider seeds the demo identities with
    pub password: String,
    pub seed_accounts: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            domain: String::from(DEFAULT_DEMO_DOMAIN),
            password: String::from(DEFAULT_DEMO_PASSWORD),
            seed_accounts: DEFAULT_SEED_ACCOUNTS,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let domain = self.domain.trim();
        if domain.is_empty() || domain.contains('@') || domain.contains(char::is_whitespace) {
            return Err(ConfigError::demo(format!(
                "demo.domain must be a bare domain name, got '{}'",
                self.domain
            )));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ConfigError::demo(format!(
                "demo.password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for DemoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoConfig")
            .field("domain", &self.domain)
            .field("password", &"<redacted>")
            .field("seed_accounts", &self.seed_accounts)
            .finish()
    }
}
