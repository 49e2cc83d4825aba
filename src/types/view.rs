//! Saved view types
//!
//! Defines the fixed set of user-directory views, their role filters and the
//! small formatting rules used when rendering them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Per-view user counts keyed by view name. Missing keys read as 0.
pub type ViewCounts = HashMap<String, u32>;

/// Counts above this value are shown as "99+"
pub const BADGE_CAP: u32 = 99;

/// Identifier of one saved view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    All,
    Clients,
    Team,
    Admins,
}

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::All => "all",
            ViewName::Clients => "clients",
            ViewName::Team => "team",
            ViewName::Admins => "admins",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role token forwarded verbatim to whoever handles the view change.
///
/// `Team` is expanded server-side into several internal roles; nothing here
/// knows about that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleFilter {
    Client,
    Team,
    Admin,
}

impl RoleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFilter::Client => "CLIENT",
            RoleFilter::Team => "TEAM",
            RoleFilter::Admin => "ADMIN",
        }
    }
}

/// Glyph shown next to a view label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIcon {
    Users,
    Building,
    UsersPair,
    Shield,
}

/// Payload handed to the view-change callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewChange {
    pub name: ViewName,
    /// `None` for the unfiltered "all" view
    pub role_filter: Option<RoleFilter>,
}

/// One selectable view, rebuilt from constants and counts on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub name: ViewName,
    pub label: &'static str,
    pub icon: ViewIcon,
    pub role_filter: Option<RoleFilter>,
    /// Tooltip text
    pub description: &'static str,
    pub count: u32,
}

impl ViewDescriptor {
    /// The callback payload produced when this view is activated
    pub fn change(&self) -> ViewChange {
        ViewChange {
            name: self.name,
            role_filter: self.role_filter,
        }
    }

    pub fn is_active(&self, active_view: &str) -> bool {
        is_active(self.name, active_view)
    }

    pub fn badge(&self) -> Option<String> {
        badge_text(self.count)
    }

    pub fn aria_label(&self) -> String {
        aria_label(self.label, self.count)
    }
}

struct ViewTemplate {
    name: ViewName,
    label: &'static str,
    icon: ViewIcon,
    role_filter: Option<RoleFilter>,
    description: &'static str,
}

const VIEWS: [ViewTemplate; 4] = [
    ViewTemplate {
        name: ViewName::All,
        label: "All Users",
        icon: ViewIcon::Users,
        role_filter: None,
        description: "View all users in the system",
    },
    ViewTemplate {
        name: ViewName::Clients,
        label: "Clients",
        icon: ViewIcon::Building,
        role_filter: Some(RoleFilter::Client),
        description: "Client user accounts",
    },
    ViewTemplate {
        name: ViewName::Team,
        label: "Team",
        icon: ViewIcon::UsersPair,
        role_filter: Some(RoleFilter::Team),
        description: "Internal team members (TEAM_MEMBER, TEAM_LEAD, STAFF)",
    },
    ViewTemplate {
        name: ViewName::Admins,
        label: "Admins",
        icon: ViewIcon::Shield,
        role_filter: Some(RoleFilter::Admin),
        description: "Administrator accounts",
    },
];

/// Build the four view descriptors in display order: all, clients, team, admins.
pub fn view_descriptors(counts: &ViewCounts) -> [ViewDescriptor; 4] {
    VIEWS.map(|view| ViewDescriptor {
        name: view.name,
        label: view.label,
        icon: view.icon,
        role_filter: view.role_filter,
        description: view.description,
        count: counts.get(view.name.as_str()).copied().unwrap_or(0),
    })
}

/// Badge text for a count; zero hides the badge.
pub fn badge_text(count: u32) -> Option<String> {
    match count {
        0 => None,
        c if c > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        c => Some(c.to_string()),
    }
}

/// Exact, case-sensitive match. Unknown names match nothing.
pub fn is_active(name: ViewName, active_view: &str) -> bool {
    name.as_str() == active_view
}

/// Screen reader label, e.g. "Clients (45 users)". The count is not capped.
pub fn aria_label(label: &str, count: u32) -> String {
    format!("{} ({} users)", label, count)
}
