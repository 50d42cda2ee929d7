pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::medical_credentials::MedicalCredentials;
pub use models::profile_update::ProfileUpdate;
pub use models::registration::Registration;
pub use models::role::Role;
pub use models::role_profile::RoleProfile;
pub use models::user_document::UserDocument;
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;

pub use error_location::ErrorLocation;

/// Document-store collection holding one document per user, keyed by provider id.
pub const USERS_COLLECTION: &str = "users";

#[cfg(test)]
mod tests;
