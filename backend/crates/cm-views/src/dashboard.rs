use cm_auth::{can_view_user_statistics, display_label, is_medical};
use cm_core::{Role, UserRecord};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    TotalUsers,
    ActiveUsers,
    MedicalStaff,
    Administrators,
    TodaysAppointments,
    Patients,
    PendingPrescriptions,
}

impl StatKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::TotalUsers => "Total de Usuarios",
            Self::ActiveUsers => "Usuarios Activos",
            Self::MedicalStaff => "Personal Médico",
            Self::Administrators => "Administradores",
            Self::TodaysAppointments => "Citas de Hoy",
            Self::Patients => "Pacientes",
            Self::PendingPrescriptions => "Recetas Pendientes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::TotalUsers => "users",
            Self::ActiveUsers => "user-check",
            Self::MedicalStaff => "stethoscope",
            Self::Administrators => "shield",
            Self::TodaysAppointments => "calendar",
            Self::Patients => "heart",
            Self::PendingPrescriptions => "clipboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub kind: StatKind,
    pub title: &'static str,
    pub icon: &'static str,
    pub value: u64,
}

impl StatCard {
    fn new(kind: StatKind, value: u64) -> Self {
        Self {
            kind,
            title: kind.title(),
            icon: kind.icon(),
            value,
        }
    }
}

/// Head counts over the stored staff records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub total_users: u64,
    pub active_users: u64,
    /// Medical and admin-medical accounts
    pub medical_staff: u64,
    /// Administrator and admin-medical accounts
    pub administrators: u64,
}

impl UserStatistics {
    pub fn from_records(users: &[UserRecord]) -> Self {
        users.iter().fold(Self::default(), |mut stats, user| {
            let role = user.role();
            stats.total_users += 1;
            if user.is_active {
                stats.active_users += 1;
            }
            if role.is_medical() {
                stats.medical_staff += 1;
            }
            if matches!(role, Role::Administrator | Role::AdminMedical) {
                stats.administrators += 1;
            }
            stats
        })
    }
}

/// Figures for the clinical cards, supplied by whatever tracks patients and
/// appointments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalSummary {
    pub todays_appointments: u64,
    pub patients: u64,
    pub pending_prescriptions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub greeting: String,
    pub role_label: &'static str,
    pub cards: Vec<StatCard>,
}

impl Dashboard {
    /// Dashboard for the signed-in `user`, or `None` without a session.
    ///
    /// `users` only feeds the user-statistics cards, which are shown to
    /// administrators and admin-medical staff; it is ignored otherwise.
    pub fn build(
        user: Option<&UserRecord>,
        users: &[UserRecord],
        clinical: &ClinicalSummary,
    ) -> Option<Self> {
        let user = user?;
        let role = Some(user.role());

        let mut cards = Vec::new();
        if can_view_user_statistics(role) {
            let stats = UserStatistics::from_records(users);
            cards.extend([
                StatCard::new(StatKind::TotalUsers, stats.total_users),
                StatCard::new(StatKind::ActiveUsers, stats.active_users),
                StatCard::new(StatKind::MedicalStaff, stats.medical_staff),
                StatCard::new(StatKind::Administrators, stats.administrators),
            ]);
        }
        if is_medical(role) {
            cards.extend([
                StatCard::new(StatKind::TodaysAppointments, clinical.todays_appointments),
                StatCard::new(StatKind::Patients, clinical.patients),
                StatCard::new(StatKind::PendingPrescriptions, clinical.pending_prescriptions),
            ]);
        }

        Some(Self {
            greeting: format!("Bienvenido, {}", user.full_name()),
            role_label: display_label(role),
            cards,
        })
    }

    pub fn card(&self, kind: StatKind) -> Option<&StatCard> {
        self.cards.iter().find(|card| card.kind == kind)
    }
}
