use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Clinic staff role. Determines which views and actions a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Clinic administration only, no clinical duties
    #[serde(rename = "administrador")]
    Administrator,
    /// Physician who also administers the clinic
    #[serde(rename = "administrador_medico")]
    AdminMedical,
    /// Physician
    #[default]
    #[serde(rename = "medico")]
    Medical,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrator, Role::AdminMedical, Role::Medical];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrador",
            Self::AdminMedical => "administrador_medico",
            Self::Medical => "medico",
        }
    }

    /// Parse a raw role string, mapping anything unrecognised to `None`.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        Self::from_str(value.trim()).ok()
    }

    /// Whether this role carries clinical duties (and medical credentials).
    pub fn is_medical(&self) -> bool {
        matches!(self, Self::Medical | Self::AdminMedical)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "administrador" => Ok(Self::Administrator),
            "administrador_medico" => Ok(Self::AdminMedical),
            "medico" => Ok(Self::Medical),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
