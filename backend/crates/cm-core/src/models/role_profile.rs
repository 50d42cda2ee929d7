use crate::{MedicalCredentials, Role};

/// Role together with the data that only exists for that role.
///
/// Administrators cannot hold a specialty or license number; the variant makes
/// that unrepresentable instead of checking it at every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Administrator,
    AdminMedical(MedicalCredentials),
    Medical(MedicalCredentials),
}

impl RoleProfile {
    /// Build a profile for `role`, discarding credentials the role cannot carry.
    pub fn new(role: Role, credentials: MedicalCredentials) -> Self {
        match role {
            Role::Administrator => Self::Administrator,
            Role::AdminMedical => Self::AdminMedical(credentials),
            Role::Medical => Self::Medical(credentials),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Administrator => Role::Administrator,
            Self::AdminMedical(_) => Role::AdminMedical,
            Self::Medical(_) => Role::Medical,
        }
    }

    pub fn credentials(&self) -> Option<&MedicalCredentials> {
        match self {
            Self::Administrator => None,
            Self::AdminMedical(credentials) | Self::Medical(credentials) => Some(credentials),
        }
    }
}
