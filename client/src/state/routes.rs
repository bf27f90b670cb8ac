//! Route table, access policy, and sidebar navigation model.
//!
//! DESIGN
//! ======
//! Every route is a variant of `AppRoute`; its path and access policy are
//! exhaustive matches, so adding a route forces a decision about who may see
//! it. `decide` is the single routing gate consulted by the `Guarded`
//! component.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::state::session::{SessionPhase, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    About,
    Login,
    Register,
    Dashboard,
    Profile,
    Projects,
    Events,
    Community,
    Learning,
    Media,
    Admin,
}

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    RequiresRole(Role),
}

/// Outcome of a routing check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore still running; render a spinner, decide nothing.
    Pending,
    Render,
    Redirect(AppRoute),
}

impl AppRoute {
    pub const ALL: [Self; 12] = [
        Self::Landing,
        Self::About,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Profile,
        Self::Projects,
        Self::Events,
        Self::Community,
        Self::Learning,
        Self::Media,
        Self::Admin,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::About => "/about",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::Projects => "/projects",
            Self::Events => "/events",
            Self::Community => "/community",
            Self::Learning => "/learning",
            Self::Media => "/media",
            Self::Admin => "/admin",
        }
    }

    /// Exact-match lookup; a single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Landing | Self::About | Self::Login | Self::Register => Access::Public,
            Self::Dashboard
            | Self::Profile
            | Self::Projects
            | Self::Events
            | Self::Community
            | Self::Learning
            | Self::Media => Access::Authenticated,
            Self::Admin => Access::RequiresRole(Role::Admin),
        }
    }
}

/// Decide whether `route` renders for `session`.
///
/// Anonymous visitors to protected routes go to the login page. Signed-in
/// users lacking the required role go to the dashboard.
#[must_use]
pub fn decide(route: AppRoute, session: &SessionState) -> RouteDecision {
    let access = route.access();
    if access == Access::Public {
        return RouteDecision::Render;
    }
    match session.phase() {
        SessionPhase::Loading => RouteDecision::Pending,
        SessionPhase::Anonymous => RouteDecision::Redirect(AppRoute::Login),
        SessionPhase::Authenticated => {
            let role = session.user.as_ref().map(|u| u.role);
            match access {
                Access::Public | Access::Authenticated => RouteDecision::Render,
                Access::RequiresRole(required) if role == Some(required) => RouteDecision::Render,
                Access::RequiresRole(_) => RouteDecision::Redirect(AppRoute::Dashboard),
            }
        }
    }
}

/// Where to send a request the router did not match: a known route
/// spelled with a trailing slash goes to that route, anything else to the
/// landing page.
#[must_use]
pub fn resolve_path(path: &str) -> AppRoute {
    AppRoute::from_path(path).unwrap_or(AppRoute::Landing)
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// One entry in the dashboard sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
    /// Emoji glyph rendered before the label.
    pub icon: &'static str,
}

const BASE_NAV: [NavItem; 7] = [
    NavItem { route: AppRoute::Dashboard, label: "Кабинет", icon: "🏠" },
    NavItem { route: AppRoute::Profile, label: "Профиль", icon: "👤" },
    NavItem { route: AppRoute::Projects, label: "Проекты", icon: "💼" },
    NavItem { route: AppRoute::Events, label: "События", icon: "📅" },
    NavItem { route: AppRoute::Community, label: "Сообщество", icon: "👥" },
    NavItem { route: AppRoute::Learning, label: "Обучение", icon: "📚" },
    NavItem { route: AppRoute::Media, label: "Медиа", icon: "🎬" },
];

const ADMIN_NAV: NavItem = NavItem { route: AppRoute::Admin, label: "Админ", icon: "⚙️" };

/// Sidebar entries visible to `role`; only what `decide` would render.
#[must_use]
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = BASE_NAV.to_vec();
    match role {
        Role::Admin => items.push(ADMIN_NAV),
        Role::Student | Role::Mentor => {}
    }
    items
}

/// Whether `item` is the entry for the current location.
#[must_use]
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    AppRoute::from_path(current_path) == Some(item.route)
}
