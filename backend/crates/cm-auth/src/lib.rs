pub mod auth_gateway;
pub mod authorization;
pub mod demo_accounts;
pub mod document_store;
pub mod error;
pub mod gateway_config;
pub mod identity;
pub mod identity_provider;
pub mod memory;
pub mod navigator;
pub mod route;
pub mod session_store;
pub mod subscription;

pub use auth_gateway::AuthGateway;
pub use authorization::{
    can_manage_users, can_view_user_statistics, display_label, is_admin_medical,
    is_administrator, is_medical,
};
pub use demo_accounts::{DemoAccounts, DemoProfile};
pub use document_store::{DocumentStore, StoredDocument, WriteMode};
pub use error::{AuthError, Result};
pub use gateway_config::GatewayConfig;
pub use identity::Identity;
pub use identity_provider::IdentityProvider;
pub use navigator::Navigator;
pub use route::Route;
pub use session_store::SessionStore;
pub use subscription::{Subscription, SubscriptionId};

const DEFAULT_DEMO_DOMAIN: &str = "clinica.com";
const FALLBACK_ROLE_LABEL: &str = "Usuario";
