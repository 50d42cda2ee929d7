use crate::{App, CliError, Commands};

use cm_config::Config;

use googletest::assert_that;
use googletest::prelude::{eq, len};
use serde_json::Value;

const DEMO_PASSWORD: &str = "demo123";

async fn create_app() -> App {
    App::from_config(&Config::default())
        .await
        .expect("Failed to build app")
}

fn sign_in(local: &str, password: &str) -> Commands {
    Commands::SignIn {
        email: format!("{local}@clinica.com"),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn given_landing_command_when_run_then_call_to_action_is_login() {
    let app = create_app().await;

    let output = app.run(Commands::Landing).await.unwrap();

    assert_eq!(output["callToAction"]["route"], "login");
}

#[tokio::test]
async fn given_login_command_when_run_then_lists_demo_hints() {
    let app = create_app().await;

    let output = app.run(Commands::Login).await.unwrap();

    let hints = output["demoHints"].as_array().unwrap();
    assert_that!(hints, len(eq(3)));
    assert_eq!(hints[0]["email"], "admin@clinica.com");
}

#[tokio::test]
async fn given_admin_medical_when_sign_in_then_dashboard_has_both_card_groups() {
    let app = create_app().await;

    let output = app
        .run(sign_in("adminmedico", DEMO_PASSWORD))
        .await
        .unwrap();

    assert_eq!(output["session"]["role"], "administrador_medico");
    assert_eq!(output["navigatedTo"], "dashboard");
    assert_eq!(output["layout"]["kind"], "authenticated");
    let cards = output["dashboard"]["cards"].as_array().unwrap();
    assert_that!(cards, len(eq(7)));
    assert_eq!(cards[0]["value"], 1);
}

#[tokio::test]
async fn given_medical_when_sign_in_then_no_user_statistics() {
    let app = create_app().await;

    let output = app.run(sign_in("medico", DEMO_PASSWORD)).await.unwrap();

    let kinds: Vec<&Value> = output["dashboard"]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| &card["kind"])
        .collect();
    assert!(!kinds.contains(&&Value::from("total_users")));
    assert!(kinds.contains(&&Value::from("patients")));
}

#[tokio::test]
async fn given_wrong_password_when_sign_in_then_localized_auth_error() {
    let app = create_app().await;

    let result = app.run(sign_in("admin", "wrong-password")).await;

    let Err(CliError::Auth { message, .. }) = result else {
        panic!("expected auth error");
    };
    assert_eq!(message, "Correo o contraseña incorrectos");
}

#[tokio::test]
async fn given_blank_form_when_sign_in_then_invalid_form_without_provider_call() {
    let app = create_app().await;

    let result = app
        .run(Commands::SignIn {
            email: String::new(),
            password: String::new(),
        })
        .await;

    assert!(matches!(result, Err(CliError::InvalidForm { .. })));
    assert!(app.gateway().session().get().is_none());
}

#[tokio::test]
async fn given_known_role_when_menu_then_role_filtered_items() {
    let app = create_app().await;

    let output = app
        .run(Commands::Menu {
            role: "administrador".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output["label"], "Administrador");
    let routes: Vec<&str> = output["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["route"].as_str())
        .collect();
    assert!(routes.contains(&"settings"));
    assert!(!routes.contains(&"patients"));
}

#[tokio::test]
async fn given_unknown_role_when_menu_then_error() {
    let app = create_app().await;

    let result = app
        .run(Commands::Menu {
            role: "enfermero".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CliError::UnknownRole { .. })));
}

#[tokio::test]
async fn given_administrator_when_users_then_lists_records_and_signs_out() {
    let app = create_app().await;
    app.run(sign_in("medico", DEMO_PASSWORD)).await.unwrap();

    let output = app
        .run(Commands::Users {
            email: "admin@clinica.com".to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert_that!(output["users"].as_array().unwrap(), len(eq(2)));
    assert_eq!(output["statistics"]["totalUsers"], 2);
    assert!(app.gateway().session().get().is_none());
}

#[tokio::test]
async fn given_medical_when_users_then_forbidden_and_signed_out() {
    let app = create_app().await;

    let result = app
        .run(Commands::Users {
            email: "medico@clinica.com".to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(CliError::Forbidden { .. })));
    assert!(app.gateway().session().get().is_none());
}

#[tokio::test]
async fn given_seeding_disabled_when_sign_in_then_invalid_credentials() {
    let mut config = Config::default();
    config.demo.seed_accounts = false;
    let app = App::from_config(&config).await.unwrap();

    let result = app.run(sign_in("admin", DEMO_PASSWORD)).await;

    assert!(matches!(result, Err(CliError::Auth { .. })));
}
