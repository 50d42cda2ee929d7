use crate::Role;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Partial profile edit. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub profile_image_url: Option<String>,
    pub signature_image_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge patch for the stored document of a user holding `role`.
    ///
    /// `specialty` and `licenseNumber` are omitted unless the role has
    /// clinical duties.
    pub fn to_patch(&self, role: Role) -> Map<String, Value> {
        let mut patch = Map::new();

        let mut put = |key: &str, value: &Option<String>| {
            if let Some(v) = value {
                patch.insert(key.to_string(), Value::String(v.clone()));
            }
        };

        put("firstName", &self.first_name);
        put("lastName", &self.last_name);
        put("phone", &self.phone);
        put("profileImageUrl", &self.profile_image_url);
        put("signatureImageUrl", &self.signature_image_url);

        if role.is_medical() {
            put("specialty", &self.specialty);
            put("licenseNumber", &self.license_number);
        }

        patch
    }
}
