use crate::Layout;
use crate::tests::user_with_role;

use cm_auth::Route;
use cm_core::Role;

#[test]
fn given_no_user_when_private_route_then_guest_redirected_to_login() {
    let layout = Layout::resolve(None, Route::Dashboard);

    assert!(!layout.is_authenticated());
    assert_eq!(layout.redirect(), Some(Route::Login));
}

#[test]
fn given_no_user_when_public_route_then_guest_without_redirect() {
    assert_eq!(
        Layout::resolve(None, Route::Landing),
        Layout::Guest { redirect: None }
    );
    assert_eq!(Layout::resolve(None, Route::Login).redirect(), None);
}

#[test]
fn given_medical_when_settings_requested_then_redirected_to_dashboard() {
    let doctor = user_with_role("m1", Role::Medical);

    let layout = Layout::resolve(Some(&doctor), Route::Settings);

    assert!(layout.is_authenticated());
    assert_eq!(layout.redirect(), Some(Route::Dashboard));
}

#[test]
fn given_signed_in_user_when_login_requested_then_redirected_to_dashboard() {
    let admin = user_with_role("a1", Role::Administrator);

    assert_eq!(
        Layout::resolve(Some(&admin), Route::Login).redirect(),
        Some(Route::Dashboard)
    );
}

#[test]
fn given_allowed_route_when_resolve_then_sidebar_marks_it_active() {
    let admin = user_with_role("a1", Role::Administrator);

    let layout = Layout::resolve(Some(&admin), Route::Users);
    let Layout::Authenticated { sidebar, redirect } = &layout else {
        panic!("expected authenticated layout");
    };

    assert_eq!(*redirect, None);
    assert_eq!(sidebar.active_route, Some(Route::Users));
    assert_eq!(layout.header().map(|h| h.role_label), Some("Administrador"));
}

#[test]
fn given_layout_when_serialized_then_tagged_by_kind() {
    let json = serde_json::to_value(Layout::resolve(None, Route::Patients)).unwrap();

    assert_eq!(json["kind"], "guest");
    assert_eq!(json["redirect"], "login");
}

#[test]
fn given_authenticated_layout_when_serialized_then_user_header_appears_once() {
    let doctor = user_with_role("m1", Role::Medical);

    let json = serde_json::to_value(Layout::resolve(Some(&doctor), Route::Patients)).unwrap();

    assert!(json.get("header").is_none());
    assert_eq!(json["sidebar"]["header"]["fullName"], "Dra. María González");
}

#[test]
fn given_guest_layout_when_header_then_none() {
    assert!(Layout::resolve(None, Route::Landing).header().is_none());
}
