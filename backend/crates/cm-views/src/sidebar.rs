use crate::{MenuItem, MenuSection, visible_items};

use cm_auth::{Route, display_label};
use cm_core::UserRecord;

use serde::Serialize;

/// Name, role and avatar shown above the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHeader {
    pub full_name: String,
    pub email: String,
    pub role_label: &'static str,
    pub initials: String,
    pub profile_image_url: Option<String>,
}

impl UserHeader {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            full_name: user.full_name(),
            email: user.email.clone(),
            role_label: display_label(Some(user.role())),
            initials: initials(&user.first_name, &user.last_name),
            profile_image_url: user.profile_image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSection {
    pub section: MenuSection,
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub header: Option<UserHeader>,
    pub sections: Vec<SidebarSection>,
    pub active_route: Option<Route>,
}

impl Sidebar {
    /// Role-filtered navigation for `user`. Sections left without a visible
    /// item are dropped.
    pub fn build(user: Option<&UserRecord>, active_route: Option<Route>) -> Self {
        let role = user.map(UserRecord::role);
        let items = visible_items(role);

        let sections = MenuSection::ALL
            .into_iter()
            .filter_map(|section| {
                let section_items: Vec<MenuItem> = items
                    .iter()
                    .filter(|item| item.section == section)
                    .map(|item| **item)
                    .collect();

                (!section_items.is_empty()).then(|| SidebarSection {
                    section,
                    title: section.title(),
                    items: section_items,
                })
            })
            .collect();

        Self {
            header: user.map(UserHeader::from_record),
            sections,
            active_route,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }
}

/// First letter of each name word, at most two, uppercased. Titles such as
/// "Dr." are skipped.
fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .split_whitespace()
        .chain(last_name.split_whitespace())
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
