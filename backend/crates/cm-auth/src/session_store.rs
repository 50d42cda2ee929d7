use crate::{Subscription, SubscriptionId};

use cm_core::{Role, UserRecord};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

type Handler = Arc<dyn Fn(Option<&UserRecord>) + Send + Sync>;

/// Holder of the signed-in user.
///
/// Cloning yields another handle to the same session. Subscribers are called
/// synchronously, in subscription order, with every new value. Writes are
/// serialized, so concurrent `set` calls resolve to last-write-wins and every
/// subscriber sees them in the same order.
///
/// Handlers may call [`SessionStore::get`] but must not call `set` or
/// `subscribe` on the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

#[derive(Default)]
pub(crate) struct SessionInner {
    state: Mutex<SessionState>,
    writer: Mutex<()>,
}

#[derive(Default)]
struct SessionState {
    current: Option<UserRecord>,
    subscribers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user.
    pub fn get(&self) -> Option<UserRecord> {
        self.inner.state().current.clone()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.inner.state().current.as_ref().map(UserRecord::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state().current.is_some()
    }

    /// Register `handler`; it is invoked right away with the current value.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(Option<&UserRecord>) + Send + Sync + 'static,
    {
        let _writer = self.inner.writer();
        let handler: Handler = Arc::new(handler);

        let (id, current) = {
            let mut state = self.inner.state();
            let id = SubscriptionId(state.next_id);
            state.next_id += 1;
            state.subscribers.push((id, Arc::clone(&handler)));
            (id, state.current.clone())
        };

        debug!("Session subscriber {} registered", id.0);
        handler(current.as_ref());

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.remove(id)
    }

    /// Replace the current user and notify every subscriber.
    pub fn set(&self, value: Option<UserRecord>) {
        let _writer = self.inner.writer();

        let (snapshot, handlers) = {
            let mut state = self.inner.state();
            state.current = value;
            let handlers: Vec<Handler> = state
                .subscribers
                .iter()
                .map(|(_, handler)| Arc::clone(handler))
                .collect();
            (state.current.clone(), handlers)
        };

        match &snapshot {
            Some(user) => debug!("Session set to {} ({})", user.id, user.role()),
            None => debug!("Session cleared"),
        }

        for handler in handlers {
            handler(snapshot.as_ref());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.state().subscribers.len()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state();
        f.debug_struct("SessionStore")
            .field("current", &state.current.as_ref().map(|u| &u.id))
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl SessionInner {
    // A panicking subscriber must not wedge the session for everyone else.
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut state = self.state();
        let before = state.subscribers.len();
        state.subscribers.retain(|(existing, _)| *existing != id);
        let removed = state.subscribers.len() != before;
        if removed {
            debug!("Session subscriber {} removed", id.0);
        }
        removed
    }
}
