pub mod medical_credentials;
pub mod profile_update;
pub mod registration;
pub mod role;
pub mod role_profile;
pub mod user_document;
pub mod user_id;
pub mod user_record;
