use serde::Serialize;

/// Application routes reachable from the gateway and the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Patients,
    Appointments,
    MedicalRecords,
    Prescriptions,
    Users,
    Reports,
    Settings,
    Profile,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Landing,
        Route::Login,
        Route::Dashboard,
        Route::Patients,
        Route::Appointments,
        Route::MedicalRecords,
        Route::Prescriptions,
        Route::Users,
        Route::Reports,
        Route::Settings,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Patients => "/pacientes",
            Self::Appointments => "/citas",
            Self::MedicalRecords => "/historias-clinicas",
            Self::Prescriptions => "/recetas",
            Self::Users => "/usuarios",
            Self::Reports => "/reportes",
            Self::Settings => "/configuracion",
            Self::Profile => "/perfil",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Landing | Self::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
