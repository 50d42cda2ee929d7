use crate::{Identity, Result as AuthErrorResult};

use async_trait::async_trait;
use tokio::sync::watch;

/// External identity service. Verifies credentials and owns the
/// authenticated-session state; this crate never stores passwords itself.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new account and sign it in.
    async fn create_account(&self, email: &str, password: &str) -> AuthErrorResult<Identity>;

    /// Verify credentials and sign the account in.
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthErrorResult<Identity>;

    /// Invalidate the provider-side session.
    async fn end_session(&self) -> AuthErrorResult<()>;

    /// Observable view of the signed-in identity.
    fn current_identity(&self) -> watch::Receiver<Option<Identity>>;
}
