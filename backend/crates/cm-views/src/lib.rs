//! View models for the clinic front-end.
//!
//! Every builder here is a pure function of the current user (if any) and
//! static tables, so it can be called on each render. Visibility decisions
//! go through the predicates in [`cm_auth::authorization`].

pub mod dashboard;
pub mod landing;
pub mod layout;
pub mod login;
pub mod menu;
pub mod sidebar;

pub use dashboard::{ClinicalSummary, Dashboard, StatCard, StatKind, UserStatistics};
pub use landing::{CallToAction, Feature, Hero, Landing};
pub use layout::Layout;
pub use login::{DemoHint, FormError, LoginForm, LoginView, error_message};
pub use menu::{MENU_ITEMS, MenuItem, MenuSection, can_access, visible_items};
pub use sidebar::{Sidebar, SidebarSection, UserHeader};

#[cfg(test)]
mod tests;
