//! Persisted form of a user record, as stored in the `users` collection.

use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat document layout. Role-specific fields are plain optionals here;
/// [`crate::UserRecord`] is the typed view over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub signature_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl UserDocument {
    /// Decode a raw store document. A document written before `uid` was
    /// stored falls back to the key it was found under.
    ///
    /// `createdAt` is required: it is fixed at creation and cannot be
    /// reconstructed on read.
    #[track_caller]
    pub fn from_value(value: Value, key: &str) -> CoreErrorResult<Self> {
        let Some(fields) = value.as_object() else {
            return Err(CoreError::invalid_document(format!(
                "user document '{key}' is not an object"
            )));
        };
        if fields.get("createdAt").is_none_or(Value::is_null) {
            return Err(CoreError::invalid_document(format!(
                "user document '{key}' has no createdAt"
            )));
        }

        let mut document: UserDocument = serde_json::from_value(value)?;
        if document.uid.is_empty() {
            document.uid = key.to_string();
        }
        Ok(document)
    }

    #[track_caller]
    pub fn to_value(&self) -> CoreErrorResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
