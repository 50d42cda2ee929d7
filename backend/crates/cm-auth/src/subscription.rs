use crate::session_store::SessionInner;

use std::sync::Weak;

/// Identifier of one session subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Handle returned by [`crate::SessionStore::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) inner: Weak<SessionInner>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Stop receiving session changes. Returns false if the store is gone or
    /// the subscriber was already removed.
    pub fn unsubscribe(self) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.remove(self.id),
            None => false,
        }
    }
}
