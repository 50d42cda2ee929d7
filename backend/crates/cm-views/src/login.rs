use cm_auth::{AuthError, DemoAccounts, display_label};

use serde::Serialize;

const GENERIC_ERROR_MESSAGE: &str = "Error al iniciar sesión. Inténtalo de nuevo";

/// Validation failure for one field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
}

impl FormError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailRequired => "El correo electrónico es obligatorio",
            Self::EmailInvalid => "Ingresa un correo electrónico válido",
            Self::PasswordRequired => "La contraseña es obligatoria",
        }
    }
}

#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FormError::EmailRequired);
        } else if !email.contains('@') {
            errors.push(FormError::EmailInvalid);
        }

        if self.password.is_empty() {
            errors.push(FormError::PasswordRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User-facing message for a failed sign-in or sign-up.
pub fn error_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::InvalidCredentials { .. } => "Correo o contraseña incorrectos",
        AuthError::AccountNotFound { .. } => "No existe una cuenta con ese correo",
        AuthError::InactiveAccount { .. } => {
            "Tu cuenta está desactivada. Contacta al administrador"
        }
        AuthError::TooManyAttempts { .. } => {
            "Demasiados intentos fallidos. Inténtalo más tarde"
        }
        AuthError::EmailAlreadyInUse { .. } => "Ese correo ya está registrado",
        AuthError::WeakPassword { .. } => "La contraseña debe tener al menos 6 caracteres",
        _ => GENERIC_ERROR_MESSAGE,
    }
}

/// One clickable demo account on the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoHint {
    pub email: String,
    pub role_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub demo_hints: Vec<DemoHint>,
    pub error: Option<&'static str>,
    pub field_errors: Vec<FormError>,
}

impl LoginView {
    pub fn new(demo_accounts: &DemoAccounts) -> Self {
        let demo_hints = demo_accounts
            .accounts()
            .into_iter()
            .map(|(email, profile)| DemoHint {
                email,
                role_label: display_label(Some(profile.role)),
            })
            .collect();

        Self {
            demo_hints,
            error: None,
            field_errors: Vec::new(),
        }
    }

    pub fn with_field_errors(mut self, field_errors: Vec<FormError>) -> Self {
        self.field_errors = field_errors;
        self
    }

    pub fn with_error(mut self, error: &AuthError) -> Self {
        self.error = Some(error_message(error));
        self
    }
}
