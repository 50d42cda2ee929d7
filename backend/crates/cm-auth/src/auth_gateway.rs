use crate::{
    AuthError, DemoAccounts, DocumentStore, GatewayConfig, Identity, IdentityProvider, Navigator,
    Result as AuthErrorResult, Route, SessionStore, WriteMode,
};

use cm_core::{
    ProfileUpdate, Registration, Role, USERS_COLLECTION, UserDocument, UserId, UserRecord,
};

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Map, Value};

/// Mediates between the views and the external identity and document services.
///
/// Provider and store errors are returned unchanged; nothing is retried.
/// The only locally produced failures are `InactiveAccount` and
/// `AccountNotFound` for identities without a stored record.
pub struct AuthGateway {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
    navigator: Arc<dyn Navigator>,
    session: SessionStore,
    demo_accounts: DemoAccounts,
}

impl AuthGateway {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn DocumentStore>,
        navigator: Arc<dyn Navigator>,
        session: SessionStore,
        config: GatewayConfig,
    ) -> Self {
        Self {
            identity,
            store,
            navigator,
            session,
            demo_accounts: DemoAccounts::from_config(&config),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn demo_accounts(&self) -> &DemoAccounts {
        &self.demo_accounts
    }

    /// Sign in and make the resolved record the current session.
    ///
    /// A demo address without a stored record gets its default record
    /// written first. An inactive, missing or unreadable record is refused,
    /// ends the provider session and leaves the local session as it was.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<UserRecord> {
        let identity = self.identity.verify_credentials(email, password).await?;
        debug!("Credentials verified for {}", identity.id);

        let record = match self.resolve_record(&identity).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Could not resolve user record for {}: {e}", identity.id);
                self.end_provider_session().await;
                return Err(e);
            }
        };

        if !record.is_active {
            warn!("Refusing sign-in for inactive account {}", record.email);
            self.end_provider_session().await;
            return Err(AuthError::inactive_account(&record.email));
        }

        info!("Signed in {} as {}", record.email, record.role());
        self.session.set(Some(record.clone()));
        self.navigator.navigate_to(Route::Dashboard);

        Ok(record)
    }

    /// Register a new account, persist its record and sign it in.
    pub async fn sign_up(&self, registration: Registration) -> AuthErrorResult<UserRecord> {
        let identity = self
            .identity
            .create_account(&registration.email, &registration.password)
            .await?;

        let record = registration.into_record(identity.id);
        self.write_record(&record).await?;
        info!("Registered {} as {}", record.email, record.role());

        self.session.set(Some(record.clone()));
        self.navigator.navigate_to(Route::Dashboard);

        Ok(record)
    }

    /// End the provider session and clear the local one.
    ///
    /// The local session is cleared even when the provider call fails; the
    /// provider error is still returned.
    pub async fn sign_out(&self) -> AuthErrorResult<()> {
        let result = self.identity.end_session().await;
        if let Err(ref e) = result {
            warn!("Identity provider failed to end session: {e}");
        }

        self.session.set(None);
        self.navigator.navigate_to(Route::Login);
        info!("Signed out");

        result
    }

    /// Re-derive the session from the provider's signed-in identity, e.g.
    /// after a restart. Leaves the session empty when there is no identity
    /// or the record is missing, unreadable or inactive. Store failures are
    /// returned.
    pub async fn restore_session(&self) -> AuthErrorResult<Option<UserRecord>> {
        let receiver = self.identity.current_identity();
        let current = receiver.borrow().clone();

        let Some(identity) = current else {
            debug!("No provider identity to restore");
            self.session.set(None);
            return Ok(None);
        };

        let restored = match self.get_user_record(&identity.id).await {
            Ok(Some(record)) if record.is_active => Some(record),
            Ok(Some(record)) => {
                warn!("Not restoring inactive account {}", record.email);
                None
            }
            Ok(None) => {
                warn!("No user record for provider identity {}", identity.id);
                None
            }
            Err(e @ AuthError::InvalidRecord { .. }) => {
                warn!("Not restoring unreadable record for {}: {e}", identity.id);
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(ref record) = restored {
            info!("Restored session for {}", record.email);
        }
        self.session.set(restored.clone());

        Ok(restored)
    }

    /// Fetch a stored record by provider id.
    pub async fn get_user_record(&self, id: &UserId) -> AuthErrorResult<Option<UserRecord>> {
        let Some(value) = self.store.get(USERS_COLLECTION, id.as_str()).await? else {
            return Ok(None);
        };

        let document = UserDocument::from_value(value, id.as_str())?;
        Ok(Some(UserRecord::try_from(document)?))
    }

    pub async fn get_role(&self, id: &UserId) -> AuthErrorResult<Option<Role>> {
        Ok(self.get_user_record(id).await?.map(|record| record.role()))
    }

    /// Every stored record. Documents that cannot be decoded are skipped.
    ///
    /// Callers restrict this to roles passing
    /// [`crate::can_view_user_statistics`].
    pub async fn list_all_users(&self) -> AuthErrorResult<Vec<UserRecord>> {
        let documents = self.store.query(USERS_COLLECTION).await?;

        let mut users = Vec::with_capacity(documents.len());
        for stored in documents {
            let decoded = UserDocument::from_value(stored.data, &stored.id)
                .and_then(UserRecord::try_from);
            match decoded {
                Ok(record) => users.push(record),
                Err(e) => warn!("Skipping unreadable user document {}: {e}", stored.id),
            }
        }

        Ok(users)
    }

    pub async fn set_active(&self, id: &UserId, is_active: bool) -> AuthErrorResult<()> {
        self.require_record(id).await?;

        let mut patch = Map::new();
        patch.insert("isActive".to_string(), Value::Bool(is_active));
        self.store
            .put(USERS_COLLECTION, id.as_str(), Value::Object(patch), WriteMode::Merge)
            .await?;
        info!(
            "Account {id} {}",
            if is_active { "activated" } else { "deactivated" }
        );

        self.refresh_if_current(id).await?;
        Ok(())
    }

    /// Merge `update` into the stored record. `specialty` and
    /// `license_number` are dropped for roles without clinical duties.
    pub async fn update_profile(
        &self,
        id: &UserId,
        update: ProfileUpdate,
    ) -> AuthErrorResult<UserRecord> {
        let existing = self.require_record(id).await?;

        let patch = update.to_patch(existing.role());
        if patch.is_empty() {
            debug!("Profile update for {id} has nothing to write");
            return Ok(existing);
        }

        self.store
            .put(USERS_COLLECTION, id.as_str(), Value::Object(patch), WriteMode::Merge)
            .await?;
        info!("Updated profile for {id}");

        let updated = self.require_record(id).await?;
        if self.is_current(id) {
            self.session.set(Some(updated.clone()));
        }
        Ok(updated)
    }

    /// Stored record for a verified identity. A demo address without one
    /// gets its default record written first.
    async fn resolve_record(&self, identity: &Identity) -> AuthErrorResult<UserRecord> {
        if let Some(record) = self.get_user_record(&identity.id).await? {
            return Ok(record);
        }

        let Some(profile) = self.demo_accounts.lookup(&identity.email) else {
            return Err(AuthError::account_not_found(&identity.email));
        };

        let record = profile.into_record(identity.id.clone(), &identity.email);
        self.write_record(&record).await?;
        info!(
            "Created default {} record for demo account {}",
            record.role(),
            identity.email
        );
        Ok(record)
    }

    async fn write_record(&self, record: &UserRecord) -> AuthErrorResult<()> {
        let document = UserDocument::from(record.clone()).to_value()?;
        self.store
            .put(USERS_COLLECTION, record.id.as_str(), document, WriteMode::Replace)
            .await
    }

    async fn require_record(&self, id: &UserId) -> AuthErrorResult<UserRecord> {
        self.get_user_record(id)
            .await?
            .ok_or_else(|| AuthError::account_not_found(id.as_str()))
    }

    async fn refresh_if_current(&self, id: &UserId) -> AuthErrorResult<()> {
        if self.is_current(id) {
            let refreshed = self.require_record(id).await?;
            self.session.set(Some(refreshed));
        }
        Ok(())
    }

    fn is_current(&self, id: &UserId) -> bool {
        self.session.get().is_some_and(|user| &user.id == id)
    }

    async fn end_provider_session(&self) {
        if let Err(e) = self.identity.end_session().await {
            warn!("Identity provider failed to end session: {e}");
        }
    }
}
