//! Role-based visibility rules.
//!
//! Every function is a pure lookup over an optional role so views can call
//! them freely on each render. `None` (no session, or an unrecognised role
//! string) is denied everything.

use crate::FALLBACK_ROLE_LABEL;

use cm_core::Role;

pub fn is_administrator(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Administrator))
}

pub fn is_admin_medical(role: Option<Role>) -> bool {
    matches!(role, Some(Role::AdminMedical))
}

/// True for any role with clinical duties, including admin-medical.
pub fn is_medical(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Medical | Role::AdminMedical))
}

pub fn can_view_user_statistics(role: Option<Role>) -> bool {
    is_administrator(role) || is_admin_medical(role)
}

/// Listing, activating and deactivating staff accounts.
pub fn can_manage_users(role: Option<Role>) -> bool {
    can_view_user_statistics(role)
}

/// Localized label shown next to the user's name.
pub fn display_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Administrator) => "Administrador",
        Some(Role::AdminMedical) => "Administrador Médico",
        Some(Role::Medical) => "Médico",
        None => FALLBACK_ROLE_LABEL,
    }
}
