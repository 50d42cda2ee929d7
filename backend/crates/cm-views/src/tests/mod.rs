mod layout;
mod menu;

use cm_core::{MedicalCredentials, Role, RoleProfile, UserId, UserRecord};

pub(crate) fn user_with_role(id: &str, role: Role) -> UserRecord {
    UserRecord::new(
        UserId::from(id),
        format!("{id}@clinica.com"),
        "Dra. María",
        "González",
        RoleProfile::new(role, MedicalCredentials::default()),
    )
}
