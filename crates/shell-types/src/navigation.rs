/// Symbolic identifier for a sidebar icon.
///
/// The UI layer maps each identifier to a concrete glyph; this crate only
/// names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Projects,
    Calendar,
    Team,
    Notifications,
    Settings,
}

impl NavIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "dashboard",
            NavIcon::Projects => "projects",
            NavIcon::Calendar => "calendar",
            NavIcon::Team => "team",
            NavIcon::Notifications => "notifications",
            NavIcon::Settings => "settings",
        }
    }
}

/// One link in the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar links in display order.
pub const NAVIGATION_ENTRIES: [NavigationEntry; 6] = [
    NavigationEntry {
        icon: NavIcon::Dashboard,
        label: "Dashboard",
        path: "/",
    },
    NavigationEntry {
        icon: NavIcon::Projects,
        label: "Projects",
        path: "/projects",
    },
    NavigationEntry {
        icon: NavIcon::Calendar,
        label: "Calendar",
        path: "/calendar",
    },
    NavigationEntry {
        icon: NavIcon::Team,
        label: "Team",
        path: "/team",
    },
    NavigationEntry {
        icon: NavIcon::Notifications,
        label: "Notifications",
        path: "/notifications",
    },
    NavigationEntry {
        icon: NavIcon::Settings,
        label: "Settings",
        path: "/settings",
    },
];
