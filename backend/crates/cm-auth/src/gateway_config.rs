use crate::DEFAULT_DEMO_DOMAIN;

/// Gateway settings, converted from the application config at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Domain of the three demo addresses (`admin@`, `adminmedico@`, `medico@`)
    pub demo_domain: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            demo_domain: String::from(DEFAULT_DEMO_DOMAIN),
        }
    }
}
