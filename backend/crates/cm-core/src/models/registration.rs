use crate::{MedicalCredentials, Role, RoleProfile, UserId, UserRecord};

use serde::Deserialize;

/// Fields supplied when a new staff account is registered.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
}

impl Registration {
    /// Build the record for a freshly created identity. Credentials are
    /// dropped for roles without clinical duties.
    pub fn into_record(self, id: UserId) -> UserRecord {
        let credentials = MedicalCredentials::new(self.specialty, self.license_number);
        let mut record = UserRecord::new(
            id,
            self.email,
            self.first_name,
            self.last_name,
            RoleProfile::new(self.role, credentials),
        );
        record.phone = self.phone;
        record
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("specialty", &self.specialty)
            .field("license_number", &self.license_number)
            .finish()
    }
}
