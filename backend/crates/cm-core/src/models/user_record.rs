use crate::{
    CoreError, MedicalCredentials, Role, RoleProfile, UserDocument, UserId,
    Result as CoreErrorResult,
};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A clinic staff account as seen by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "UserDocument", try_from = "UserDocument")]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub profile: RoleProfile,
    pub profile_image_url: Option<String>,
    pub signature_image_url: Option<String>,
    /// Set once when the record is created
    pub created_at: DateTime<Utc>,
    /// Inactive accounts are refused sign-in
    pub is_active: bool,
}

impl UserRecord {
    /// Create an active record with no optional details.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        profile: RoleProfile,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            profile,
            profile_image_url: None,
            signature_image_url: None,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn specialty(&self) -> Option<&str> {
        self.profile
            .credentials()
            .and_then(|c| c.specialty.as_deref())
    }

    pub fn license_number(&self) -> Option<&str> {
        self.profile
            .credentials()
            .and_then(|c| c.license_number.as_deref())
    }
}

impl From<UserRecord> for UserDocument {
    fn from(record: UserRecord) -> Self {
        let role = record.role().as_str().to_string();
        let (specialty, license_number) = match record.profile {
            RoleProfile::Administrator => (None, None),
            RoleProfile::AdminMedical(c) | RoleProfile::Medical(c) => {
                (c.specialty, c.license_number)
            }
        };

        UserDocument {
            uid: record.id.to_string(),
            email: record.email,
            role,
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            specialty,
            license_number,
            profile_image_url: record.profile_image_url,
            signature_image_url: record.signature_image_url,
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}

impl TryFrom<UserDocument> for UserRecord {
    type Error = CoreError;

    #[track_caller]
    fn try_from(document: UserDocument) -> CoreErrorResult<Self> {
        let role = Role::from_str(&document.role)?;
        let credentials = MedicalCredentials::new(document.specialty, document.license_number);

        Ok(UserRecord {
            id: UserId::from(document.uid),
            email: document.email,
            first_name: document.first_name,
            last_name: document.last_name,
            phone: document.phone,
            profile: RoleProfile::new(role, credentials),
            profile_image_url: document.profile_image_url,
            signature_image_url: document.signature_image_url,
            created_at: document.created_at,
            is_active: document.is_active,
        })
    }
}
