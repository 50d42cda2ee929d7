use crate::CliError;

use cm_auth::AuthError;
use cm_views::FormError;

#[test]
fn given_auth_error_when_converted_then_carries_localized_message() {
    let error = CliError::from(AuthError::too_many_attempts());

    let text = error.to_string();

    assert!(text.starts_with("Demasiados intentos fallidos"));
}

#[test]
fn given_form_errors_when_displayed_then_messages_joined() {
    let error = CliError::InvalidForm {
        errors: vec![FormError::EmailRequired, FormError::PasswordRequired],
    };

    assert_eq!(
        error.to_string(),
        "Invalid login form: El correo electrónico es obligatorio; La contraseña es obligatoria"
    );
}

#[test]
fn given_forbidden_when_displayed_then_includes_message() {
    let error = CliError::forbidden("medico may not list users");

    let text = error.to_string();

    assert!(text.contains("Access denied: medico may not list users"));
}
