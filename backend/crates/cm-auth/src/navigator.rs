use crate::Route;

/// Router hook. Fire-and-forget: the gateway never waits on navigation.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
}
