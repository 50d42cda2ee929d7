use crate::{MENU_ITEMS, MenuSection, can_access, visible_items};

use cm_auth::Route;
use cm_core::Role;

fn visible_routes(role: Option<Role>) -> Vec<Route> {
    visible_items(role).iter().map(|item| item.route).collect()
}

#[test]
fn given_no_role_when_visible_items_then_empty() {
    assert!(visible_items(None).is_empty());
}

#[test]
fn given_administrator_when_visible_items_then_no_clinical_entries() {
    let routes = visible_routes(Some(Role::Administrator));

    assert_eq!(
        routes,
        vec![
            Route::Dashboard,
            Route::Users,
            Route::Reports,
            Route::Settings,
            Route::Profile
        ]
    );
}

#[test]
fn given_medical_when_visible_items_then_no_administration_entries() {
    let routes = visible_routes(Some(Role::Medical));

    assert!(routes.contains(&Route::Patients));
    assert!(routes.contains(&Route::Prescriptions));
    assert!(!routes.contains(&Route::Users));
    assert!(!routes.contains(&Route::Reports));
    assert!(!routes.contains(&Route::Settings));
}

#[test]
fn given_admin_medical_when_visible_items_then_clinical_and_user_management() {
    let routes = visible_routes(Some(Role::AdminMedical));

    assert!(routes.contains(&Route::Appointments));
    assert!(routes.contains(&Route::Users));
    assert!(!routes.contains(&Route::Settings));
}

#[test]
fn given_any_role_when_visible_items_then_table_order_kept() {
    for role in Role::ALL {
        let visible = visible_items(Some(role));
        let positions: Vec<usize> = visible
            .iter()
            .map(|item| {
                MENU_ITEMS
                    .iter()
                    .position(|candidate| candidate.route == item.route)
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_menu_routes_are_private_and_unique() {
    for (index, item) in MENU_ITEMS.iter().enumerate() {
        assert!(!item.route.is_public(), "{} is public", item.route);
        assert!(!item.allowed_roles.is_empty(), "{} has no roles", item.route);
        assert!(
            MENU_ITEMS[index + 1..]
                .iter()
                .all(|other| other.route != item.route)
        );
    }
}

#[test]
fn given_public_route_when_can_access_then_open_to_everyone() {
    assert!(can_access(Route::Landing, None));
    assert!(can_access(Route::Login, None));
    assert!(can_access(Route::Login, Some(Role::Medical)));
}

#[test]
fn given_private_route_without_role_when_can_access_then_denied() {
    for item in MENU_ITEMS.iter() {
        assert!(!can_access(item.route, None));
    }
}

#[test]
fn given_menu_table_when_can_access_then_matches_visibility() {
    for role in Role::ALL {
        for item in MENU_ITEMS.iter() {
            assert_eq!(
                can_access(item.route, Some(role)),
                item.allowed_roles.contains(&role)
            );
        }
    }
}

#[test]
fn test_section_titles() {
    assert_eq!(MenuSection::Main.title(), "Principal");
    assert_eq!(MenuSection::Administration.title(), "Administración");
}
