use crate::{AuthError, DemoAccounts, Identity, IdentityProvider, Result as AuthErrorResult};

use cm_core::UserId;

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;
pub const MIN_PASSWORD_LENGTH: usize = 6;

struct Account {
    id: UserId,
    email: String,
    password: String,
    disabled: bool,
}

/// Identity provider holding accounts in memory.
///
/// Emails are matched case-insensitively. After `max_failed_attempts`
/// consecutive wrong passwords an address is locked out with
/// `TooManyAttempts` until [`MemoryIdentityProvider::reset_attempts`].
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    failed_attempts: RwLock<HashMap<String, u32>>,
    max_failed_attempts: u32,
    current: watch::Sender<Option<Identity>>,
}

impl MemoryIdentityProvider {
    pub fn new(max_failed_attempts: u32) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            failed_attempts: RwLock::new(HashMap::new()),
            max_failed_attempts,
            current,
        }
    }

    /// Add an account without signing it in.
    pub async fn register(&self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        let key = normalize(email);
        if !key.contains('@') {
            return Err(AuthError::from_provider_code(
                "auth/invalid-email",
                format!("'{email}' is not an email address"),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::weak_password(format!(
                "password must have at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(AuthError::email_already_in_use(key));
        }

        let identity = Identity::new(UserId::new(Uuid::new_v4().to_string()), key.clone());
        accounts.insert(
            key.clone(),
            Account {
                id: identity.id.clone(),
                email: key,
                password: password.to_string(),
                disabled: false,
            },
        );

        debug!("Registered identity {}", identity.id);
        Ok(identity)
    }

    /// Register every demo address of `demo_accounts` with `password`.
    /// Addresses that already exist are left alone.
    pub async fn seed_demo_accounts(
        &self,
        demo_accounts: &DemoAccounts,
        password: &str,
    ) -> AuthErrorResult<Vec<Identity>> {
        let mut seeded = Vec::new();
        for (email, _) in demo_accounts.accounts() {
            match self.register(&email, password).await {
                Ok(identity) => seeded.push(identity),
                Err(AuthError::EmailAlreadyInUse { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        info!("Seeded {} demo identities", seeded.len());
        Ok(seeded)
    }

    /// Mark an account disabled at the provider. Returns false if unknown.
    pub async fn set_disabled(&self, email: &str, disabled: bool) -> bool {
        match self.accounts.write().await.get_mut(&normalize(email)) {
            Some(account) => {
                account.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub async fn reset_attempts(&self, email: &str) {
        self.failed_attempts.write().await.remove(&normalize(email));
    }

    async fn record_failure(&self, key: &str) {
        let mut attempts = self.failed_attempts.write().await;
        let count = attempts.entry(key.to_string()).or_insert(0);
        *count += 1;
        debug!("Failed sign-in attempt {} for {key}", *count);
    }
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FAILED_ATTEMPTS)
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        let identity = self.register(email, password).await?;
        self.current.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        let key = normalize(email);

        let attempts = self
            .failed_attempts
            .read()
            .await
            .get(&key)
            .copied()
            .unwrap_or(0);
        if attempts >= self.max_failed_attempts {
            return Err(AuthError::too_many_attempts());
        }

        let matched = {
            let accounts = self.accounts.read().await;
            match accounts.get(&key) {
                None => return Err(AuthError::invalid_credentials()),
                Some(account) if account.disabled && account.password == password => {
                    return Err(AuthError::from_provider_code(
                        "auth/user-disabled",
                        account.email.clone(),
                    ));
                }
                Some(account) if account.password == password => Some(Identity::new(
                    account.id.clone(),
                    account.email.clone(),
                )),
                Some(_) => None,
            }
        };

        let Some(identity) = matched else {
            self.record_failure(&key).await;
            return Err(AuthError::invalid_credentials());
        };

        self.failed_attempts.write().await.remove(&key);
        self.current.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn end_session(&self) -> AuthErrorResult<()> {
        self.current.send_replace(None);
        Ok(())
    }

    fn current_identity(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
