#![allow(dead_code)]

//! Test infrastructure for gateway tests

use cm_auth::memory::{MemoryDocumentStore, MemoryIdentityProvider, RecordingNavigator};
use cm_auth::{AuthGateway, GatewayConfig, SessionStore};

use std::sync::Arc;

pub const DEMO_DOMAIN: &str = "clinica.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// A gateway wired to in-memory services, with handles to each of them.
pub struct TestHarness {
    pub gateway: AuthGateway,
    pub identity: Arc<MemoryIdentityProvider>,
    pub store: Arc<MemoryDocumentStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub session: SessionStore,
}

/// Create a harness whose provider knows the three demo identities.
pub async fn create_test_harness() -> TestHarness {
    let identity = Arc::new(MemoryIdentityProvider::default());
    let store = Arc::new(MemoryDocumentStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let session = SessionStore::new();

    let config = GatewayConfig {
        demo_domain: DEMO_DOMAIN.to_string(),
    };

    let gateway = AuthGateway::new(
        identity.clone(),
        store.clone(),
        navigator.clone(),
        session.clone(),
        config,
    );

    identity
        .seed_demo_accounts(gateway.demo_accounts(), DEMO_PASSWORD)
        .await
        .expect("Failed to seed demo identities");

    TestHarness {
        gateway,
        identity,
        store,
        navigator,
        session,
    }
}

pub fn demo_email(local: &str) -> String {
    format!("{local}@{DEMO_DOMAIN}")
}
