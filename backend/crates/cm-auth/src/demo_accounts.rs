use crate::GatewayConfig;

use cm_core::{MedicalCredentials, Role, RoleProfile, UserId, UserRecord};

/// Default identity for an account that has no stored record yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoProfile {
    pub role: Role,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

impl DemoProfile {
    pub fn into_record(self, id: UserId, email: impl Into<String>) -> UserRecord {
        UserRecord::new(
            id,
            email,
            self.first_name,
            self.last_name,
            RoleProfile::new(self.role, MedicalCredentials::default()),
        )
    }
}

const KNOWN_ACCOUNTS: [(&str, DemoProfile); 3] = [
    (
        "admin",
        DemoProfile {
            role: Role::Administrator,
            first_name: "Super",
            last_name: "Administrador",
        },
    ),
    (
        "adminmedico",
        DemoProfile {
            role: Role::AdminMedical,
            first_name: "Dr. Carlos",
            last_name: "Rodríguez",
        },
    ),
    (
        "medico",
        DemoProfile {
            role: Role::Medical,
            first_name: "Dra. María",
            last_name: "González",
        },
    ),
];

const FALLBACK_PROFILE: DemoProfile = DemoProfile {
    role: Role::Medical,
    first_name: "Usuario",
    last_name: "Demo",
};

/// Fixed email-to-profile table for the demo accounts of one domain.
#[derive(Debug, Clone)]
pub struct DemoAccounts {
    domain: String,
}

impl DemoAccounts {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into().trim().to_lowercase(),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(&config.demo_domain)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The demo addresses with the profile each one is given.
    pub fn accounts(&self) -> Vec<(String, DemoProfile)> {
        KNOWN_ACCOUNTS
            .iter()
            .map(|(local, profile)| (format!("{local}@{}", self.domain), *profile))
            .collect()
    }

    /// Profile for one of the known demo addresses (case-insensitive).
    pub fn lookup(&self, email: &str) -> Option<DemoProfile> {
        let normalized = email.trim().to_lowercase();
        let (local, domain) = normalized.split_once('@')?;
        if domain != self.domain {
            return None;
        }

        KNOWN_ACCOUNTS
            .iter()
            .find(|(known, _)| *known == local)
            .map(|(_, profile)| *profile)
    }

    /// Total form of [`DemoAccounts::lookup`]: any other address gets the
    /// generic medical profile.
    pub fn infer(&self, email: &str) -> DemoProfile {
        self.lookup(email).unwrap_or(FALLBACK_PROFILE)
    }
}
