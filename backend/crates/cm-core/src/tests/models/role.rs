use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Administrator.as_str(), "administrador");
    assert_eq!(Role::AdminMedical.as_str(), "administrador_medico");
    assert_eq!(Role::Medical.as_str(), "medico");
}

#[test]
fn test_role_from_str() {
    assert_eq!(
        Role::from_str("administrador").unwrap(),
        Role::Administrator
    );
    assert_eq!(
        Role::from_str("administrador_medico").unwrap(),
        Role::AdminMedical
    );
    assert_eq!(Role::from_str("medico").unwrap(), Role::Medical);
    assert!(Role::from_str("enfermero").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_default_is_medical() {
    assert_eq!(Role::default(), Role::Medical);
}

#[test]
fn given_unknown_string_when_parse_lenient_then_none() {
    assert_eq!(Role::parse_lenient("superuser"), None);
    assert_eq!(Role::parse_lenient(" medico "), Some(Role::Medical));
}

#[test]
fn given_role_when_serialized_then_uses_persisted_name() {
    let json = serde_json::to_string(&Role::AdminMedical).unwrap();
    assert_eq!(json, "\"administrador_medico\"");

    let parsed: Role = serde_json::from_str("\"administrador\"").unwrap();
    assert_eq!(parsed, Role::Administrator);
}

#[test]
fn test_role_is_medical() {
    assert!(!Role::Administrator.is_medical());
    assert!(Role::AdminMedical.is_medical());
    assert!(Role::Medical.is_medical());
}
