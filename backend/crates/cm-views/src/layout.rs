use crate::{Sidebar, UserHeader, can_access};

use cm_auth::Route;
use cm_core::UserRecord;

use log::debug;
use serde::Serialize;

/// Page frame chosen for a requested route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// No session. Private routes redirect to the login page.
    Guest { redirect: Option<Route> },
    /// Signed in. A route the role may not open redirects to the dashboard,
    /// and so does the login page. The user header lives in the sidebar.
    Authenticated {
        sidebar: Sidebar,
        redirect: Option<Route>,
    },
}

impl Layout {
    pub fn resolve(user: Option<&UserRecord>, requested: Route) -> Self {
        let Some(user) = user else {
            let redirect = (!requested.is_public()).then_some(Route::Login);
            if redirect.is_some() {
                debug!("Guest requested {requested}, redirecting to login");
            }
            return Self::Guest { redirect };
        };

        let redirect = if requested == Route::Login {
            debug!("{} is already signed in, redirecting to dashboard", user.email);
            Some(Route::Dashboard)
        } else if !can_access(requested, Some(user.role())) {
            debug!(
                "{} may not open {requested}, redirecting to dashboard",
                user.role()
            );
            Some(Route::Dashboard)
        } else {
            None
        };
        let active = redirect.unwrap_or(requested);

        Self::Authenticated {
            sidebar: Sidebar::build(Some(user), Some(active)),
            redirect,
        }
    }

    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Guest { redirect } | Self::Authenticated { redirect, .. } => *redirect,
        }
    }

    pub fn header(&self) -> Option<&UserHeader> {
        match self {
            Self::Guest { .. } => None,
            Self::Authenticated { sidebar, .. } => sidebar.header.as_ref(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
