use crate::{
    CoreError, MedicalCredentials, Registration, Role, RoleProfile, UserDocument, UserId,
    UserRecord,
};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::json;

fn cardiologist() -> UserRecord {
    let mut record = UserRecord::new(
        UserId::from("uid-1"),
        "medico@clinica.com",
        "Dra. María",
        "González",
        RoleProfile::Medical(MedicalCredentials::new(
            Some("Cardiología".to_string()),
            Some("MP-1234".to_string()),
        )),
    );
    record.phone = Some("555-0101".to_string());
    record
}

#[test]
fn given_new_record_then_active_and_optional_fields_empty() {
    let record = UserRecord::new(
        UserId::from("uid-2"),
        "admin@clinica.com",
        "Super",
        "Administrador",
        RoleProfile::Administrator,
    );

    assert!(record.is_active);
    assert_that!(record.role(), eq(Role::Administrator));
    assert_that!(record.phone, none());
    assert_that!(record.profile_image_url, none());
    assert_that!(record.specialty(), none());
}

#[test]
fn given_record_when_full_name_then_joins_first_and_last() {
    assert_eq!(cardiologist().full_name(), "Dra. María González");
}

#[test]
fn given_medical_record_when_converted_to_document_then_keeps_credentials() {
    let document = UserDocument::from(cardiologist());

    assert_eq!(document.role, "medico");
    assert_that!(document.specialty.as_deref(), some(eq("Cardiología")));
    assert_that!(document.license_number.as_deref(), some(eq("MP-1234")));
    assert_eq!(document.uid, "uid-1");
}

#[test]
fn given_admin_document_with_credentials_when_converted_then_credentials_dropped() {
    let value = json!({
        "uid": "uid-3",
        "email": "admin@clinica.com",
        "role": "administrador",
        "firstName": "Super",
        "lastName": "Administrador",
        "specialty": "Pediatría",
        "licenseNumber": "X-1",
        "createdAt": "2024-01-01T00:00:00Z",
        "isActive": true
    });

    let document = UserDocument::from_value(value, "uid-3").unwrap();
    let record = UserRecord::try_from(document).unwrap();

    assert_eq!(record.profile, RoleProfile::Administrator);
    assert_that!(record.specialty(), none());
    assert_that!(record.license_number(), none());
}

#[test]
fn given_document_missing_optional_fields_when_decoded_then_defaults_applied() {
    let value = json!({
        "role": "medico",
        "email": "medico@clinica.com",
        "createdAt": "2024-01-01T00:00:00Z"
    });

    let document = UserDocument::from_value(value, "key-9").unwrap();

    assert_eq!(document.uid, "key-9");
    assert!(document.is_active);
    assert_eq!(document.first_name, "");
    assert_that!(document.profile_image_url, none());
}

#[test]
fn given_unknown_role_when_converted_then_invalid_role_error() {
    let value = json!({
        "uid": "u",
        "role": "enfermero",
        "createdAt": "2024-01-01T00:00:00Z"
    });
    let document = UserDocument::from_value(value, "u").unwrap();

    let result = UserRecord::try_from(document);

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn given_document_without_created_at_when_decoded_then_invalid_document() {
    let value = json!({ "uid": "u", "role": "medico" });

    let result = UserDocument::from_value(value, "u");

    assert!(matches!(result, Err(CoreError::InvalidDocument { .. })));
}

#[test]
fn given_null_created_at_when_decoded_then_invalid_document() {
    let value = json!({ "uid": "u", "role": "medico", "createdAt": null });

    let result = UserDocument::from_value(value, "u");

    assert!(matches!(result, Err(CoreError::InvalidDocument { .. })));
}

#[test]
fn given_same_document_when_decoded_twice_then_created_at_unchanged() {
    let value = json!({
        "uid": "u",
        "role": "medico",
        "createdAt": "2024-01-01T00:00:00Z"
    });

    let first = UserRecord::try_from(UserDocument::from_value(value.clone(), "u").unwrap()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = UserRecord::try_from(UserDocument::from_value(value, "u").unwrap()).unwrap();

    assert_eq!(first.created_at, second.created_at);
    assert_eq!(first.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn given_non_object_value_when_decoded_then_invalid_document() {
    let result = UserDocument::from_value(json!("not a document"), "u");

    assert!(matches!(result, Err(CoreError::InvalidDocument { .. })));
}

#[test]
fn given_record_when_serialized_then_uses_document_layout() {
    let value = serde_json::to_value(cardiologist()).unwrap();

    assert_eq!(value["firstName"], "Dra. María");
    assert_eq!(value["role"], "medico");
    assert_eq!(value["isActive"], true);
    assert!(value["profileImageUrl"].is_null());

    let restored: UserRecord = serde_json::from_value(value).unwrap();
    assert_eq!(restored, cardiologist());
}

#[test]
fn given_admin_registration_when_into_record_then_credentials_dropped() {
    let registration = Registration {
        email: "nuevo@clinica.com".to_string(),
        password: "secreto123".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        role: Role::Administrator,
        phone: Some("555-0199".to_string()),
        specialty: Some("Dermatología".to_string()),
        license_number: Some("L-7".to_string()),
    };

    let record = registration.into_record(UserId::from("uid-new"));

    assert_eq!(record.role(), Role::Administrator);
    assert_that!(record.specialty(), none());
    assert_that!(record.phone.as_deref(), some(eq("555-0199")));
    assert!(record.is_active);
}

#[test]
fn given_registration_when_debug_formatted_then_password_redacted() {
    let registration = Registration {
        email: "nuevo@clinica.com".to_string(),
        password: "secreto123".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        role: Role::Medical,
        phone: None,
        specialty: None,
        license_number: None,
    };

    let debug = format!("{registration:?}");

    assert!(!debug.contains("secreto123"));
    assert!(debug.contains("<redacted>"));
}
