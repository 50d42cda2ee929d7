use cm_auth::Route;
use cm_core::Role;

use serde::Serialize;

const ALL_ROLES: &[Role] = &Role::ALL;
const CLINICAL_ROLES: &[Role] = &[Role::AdminMedical, Role::Medical];
const MANAGEMENT_ROLES: &[Role] = &[Role::Administrator, Role::AdminMedical];
const ADMINISTRATOR_ONLY: &[Role] = &[Role::Administrator];

/// Sidebar grouping, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    Main,
    Clinical,
    Administration,
    Account,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [
        MenuSection::Main,
        MenuSection::Clinical,
        MenuSection::Administration,
        MenuSection::Account,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Main => "Principal",
            Self::Clinical => "Atención Médica",
            Self::Administration => "Administración",
            Self::Account => "Cuenta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub route: Route,
    pub icon: &'static str,
    pub label: &'static str,
    pub allowed_roles: &'static [Role],
    pub section: MenuSection,
}

impl MenuItem {
    const fn new(
        route: Route,
        icon: &'static str,
        label: &'static str,
        allowed_roles: &'static [Role],
        section: MenuSection,
    ) -> Self {
        Self {
            route,
            icon,
            label,
            allowed_roles,
            section,
        }
    }

    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }
}

/// Every navigable page behind the sign-in, in sidebar order.
pub static MENU_ITEMS: [MenuItem; 9] = [
    MenuItem::new(
        Route::Dashboard,
        "home",
        "Dashboard",
        ALL_ROLES,
        MenuSection::Main,
    ),
    MenuItem::new(
        Route::Patients,
        "users",
        "Pacientes",
        CLINICAL_ROLES,
        MenuSection::Clinical,
    ),
    MenuItem::new(
        Route::Appointments,
        "calendar",
        "Citas",
        CLINICAL_ROLES,
        MenuSection::Clinical,
    ),
    MenuItem::new(
        Route::MedicalRecords,
        "file-text",
        "Historias Clínicas",
        CLINICAL_ROLES,
        MenuSection::Clinical,
    ),
    MenuItem::new(
        Route::Prescriptions,
        "clipboard",
        "Recetas",
        CLINICAL_ROLES,
        MenuSection::Clinical,
    ),
    MenuItem::new(
        Route::Users,
        "user-cog",
        "Usuarios",
        MANAGEMENT_ROLES,
        MenuSection::Administration,
    ),
    MenuItem::new(
        Route::Reports,
        "bar-chart",
        "Reportes",
        MANAGEMENT_ROLES,
        MenuSection::Administration,
    ),
    MenuItem::new(
        Route::Settings,
        "settings",
        "Configuración",
        ADMINISTRATOR_ONLY,
        MenuSection::Administration,
    ),
    MenuItem::new(
        Route::Profile,
        "user",
        "Mi Perfil",
        ALL_ROLES,
        MenuSection::Account,
    ),
];

/// Menu entries the role may see, in table order. Nothing without a role.
pub fn visible_items(role: Option<Role>) -> Vec<&'static MenuItem> {
    MENU_ITEMS
        .iter()
        .filter(|item| item.is_visible_to(role))
        .collect()
}

/// Route guard. Public routes are open to everyone; every other route needs
/// a role listed for it in [`MENU_ITEMS`].
pub fn can_access(route: Route, role: Option<Role>) -> bool {
    if route.is_public() {
        return true;
    }

    MENU_ITEMS
        .iter()
        .find(|item| item.route == route)
        .is_some_and(|item| item.is_visible_to(role))
}
