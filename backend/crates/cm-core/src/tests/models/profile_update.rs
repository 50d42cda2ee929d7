use crate::{ProfileUpdate, Role};

use serde_json::Value;

fn update_with_credentials() -> ProfileUpdate {
    ProfileUpdate {
        phone: Some("555-0202".to_string()),
        specialty: Some("Cardiology".to_string()),
        license_number: Some("MP-99".to_string()),
        ..Default::default()
    }
}

#[test]
fn given_administrator_when_to_patch_then_credentials_dropped() {
    let patch = update_with_credentials().to_patch(Role::Administrator);

    assert!(!patch.contains_key("specialty"));
    assert!(!patch.contains_key("licenseNumber"));
    assert_eq!(
        patch.get("phone"),
        Some(&Value::String("555-0202".to_string()))
    );
}

#[test]
fn given_medical_roles_when_to_patch_then_credentials_kept() {
    for role in [Role::Medical, Role::AdminMedical] {
        let patch = update_with_credentials().to_patch(role);

        assert_eq!(
            patch.get("specialty"),
            Some(&Value::String("Cardiology".to_string()))
        );
        assert_eq!(
            patch.get("licenseNumber"),
            Some(&Value::String("MP-99".to_string()))
        );
    }
}

#[test]
fn given_empty_update_when_to_patch_then_empty() {
    let update = ProfileUpdate::default();

    assert!(update.is_empty());
    assert!(update.to_patch(Role::Medical).is_empty());
}
