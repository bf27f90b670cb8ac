//! Dashboard chrome state (mobile sidebar, notification dropdown).
//!
//! DESIGN
//! ======
//! Keeps transient presentation toggles out of the session state so the
//! shell can re-render freely without touching identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar drawer on narrow screens. Always visible on desktop.
    pub sidebar_open: bool,
    pub notifications_open: bool,
}

impl UiState {
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// Navigating via the sidebar closes the mobile drawer.
    pub fn on_navigate(&mut self) {
        self.sidebar_open = false;
        self.notifications_open = false;
    }
}
