use crate::{CliError, Commands, Result as CliErrorResult};

use cm_auth::memory::{MemoryDocumentStore, MemoryIdentityProvider, RecordingNavigator};
use cm_auth::{
    AuthGateway, GatewayConfig, Route, SessionStore, can_manage_users, can_view_user_statistics,
    display_label,
};
use cm_config::Config;
use cm_core::{Role, UserRecord};
use cm_views::{
    ClinicalSummary, Dashboard, Landing, Layout, LoginForm, LoginView, UserStatistics,
    visible_items,
};

use std::sync::Arc;

use log::{debug, info};
use serde_json::{Value, json};

/// The gateway wired to in-memory services, seeded from the config.
pub struct App {
    gateway: AuthGateway,
    navigator: Arc<RecordingNavigator>,
}

impl App {
    pub async fn from_config(config: &Config) -> CliErrorResult<Self> {
        let identity = Arc::new(MemoryIdentityProvider::new(config.auth.max_failed_attempts));
        let store = Arc::new(MemoryDocumentStore::new());
        let navigator = Arc::new(RecordingNavigator::new());

        let gateway = AuthGateway::new(
            identity.clone(),
            store,
            navigator.clone(),
            SessionStore::new(),
            GatewayConfig {
                demo_domain: config.demo.domain.clone(),
            },
        );

        if config.demo.seed_accounts {
            identity
                .seed_demo_accounts(gateway.demo_accounts(), &config.demo.password)
                .await?;
        } else {
            debug!("Demo account seeding disabled");
        }

        Ok(Self { gateway, navigator })
    }

    pub fn gateway(&self) -> &AuthGateway {
        &self.gateway
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Landing => self.landing(),
            Commands::Login => self.login_page(),
            Commands::SignIn { email, password } => self.sign_in(&email, &password).await,
            Commands::Menu { role } => self.menu(&role),
            Commands::Users { email, password } => self.users(&email, &password).await,
        }
    }

    fn landing(&self) -> CliErrorResult<Value> {
        Ok(serde_json::to_value(Landing::build())?)
    }

    fn login_page(&self) -> CliErrorResult<Value> {
        Ok(serde_json::to_value(LoginView::new(self.gateway.demo_accounts()))?)
    }

    async fn sign_in(&self, email: &str, password: &str) -> CliErrorResult<Value> {
        let user = self.authenticate(email, password).await?;
        let role = Some(user.role());

        let users = if can_view_user_statistics(role) {
            self.gateway.list_all_users().await?
        } else {
            Vec::new()
        };

        let session = self.gateway.session().get();
        let layout = Layout::resolve(session.as_ref(), Route::Dashboard);
        let dashboard = Dashboard::build(session.as_ref(), &users, &ClinicalSummary::default());

        Ok(json!({
            "session": session,
            "navigatedTo": self.navigator.last(),
            "layout": layout,
            "dashboard": dashboard,
        }))
    }

    fn menu(&self, role: &str) -> CliErrorResult<Value> {
        let parsed = Role::parse_lenient(role).ok_or_else(|| CliError::unknown_role(role))?;

        Ok(json!({
            "role": parsed,
            "label": display_label(Some(parsed)),
            "items": visible_items(Some(parsed)),
        }))
    }

    /// Staff listing. Signs in as the caller, refuses roles that may not
    /// manage users, and signs out again.
    async fn users(&self, email: &str, password: &str) -> CliErrorResult<Value> {
        let user = self.authenticate(email, password).await?;

        if !can_manage_users(Some(user.role())) {
            self.gateway.sign_out().await?;
            return Err(CliError::forbidden(format!(
                "{} ({}) may not list users",
                user.email,
                display_label(Some(user.role()))
            )));
        }

        let users = self.gateway.list_all_users().await?;
        info!("Listed {} user records for {}", users.len(), user.email);
        self.gateway.sign_out().await?;

        Ok(json!({
            "statistics": UserStatistics::from_records(&users),
            "users": users,
        }))
    }

    async fn authenticate(&self, email: &str, password: &str) -> CliErrorResult<UserRecord> {
        LoginForm::new(email, password)
            .validate()
            .map_err(|errors| CliError::InvalidForm { errors })?;

        Ok(self.gateway.sign_in(email, password).await?)
    }
}
