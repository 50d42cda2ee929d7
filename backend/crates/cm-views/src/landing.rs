use cm_auth::Route;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

/// Public marketing page. Identical for every visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Landing {
    pub hero: Hero,
    pub features: &'static [Feature],
    pub call_to_action: CallToAction,
}

const HERO: Hero = Hero {
    title: "Gestión clínica integral",
    subtitle: "Pacientes, citas, historias clínicas y recetas en un solo lugar",
};

const FEATURES: &[Feature] = &[
    Feature {
        icon: "users",
        title: "Gestión de Pacientes",
        description: "Registro completo de pacientes y su información de contacto",
    },
    Feature {
        icon: "calendar",
        title: "Agenda de Citas",
        description: "Programación y seguimiento de consultas médicas",
    },
    Feature {
        icon: "file-text",
        title: "Historias Clínicas",
        description: "Historial médico digital de cada paciente",
    },
    Feature {
        icon: "clipboard",
        title: "Recetas Digitales",
        description: "Emisión de recetas con firma digital del médico",
    },
    Feature {
        icon: "shield",
        title: "Control de Acceso",
        description: "Permisos por rol para administradores y personal médico",
    },
];

const CALL_TO_ACTION: CallToAction = CallToAction {
    label: "Iniciar Sesión",
    route: Route::Login,
};

impl Landing {
    pub fn build() -> Self {
        Self {
            hero: HERO,
            features: FEATURES,
            call_to_action: CALL_TO_ACTION,
        }
    }
}
