use serde::{Deserialize, Serialize};

/// Professional details only meaningful for roles with clinical duties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCredentials {
    pub specialty: Option<String>,
    pub license_number: Option<String>,
}

impl MedicalCredentials {
    pub fn new(specialty: Option<String>, license_number: Option<String>) -> Self {
        Self {
            specialty,
            license_number,
        }
    }
}
