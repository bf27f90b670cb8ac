//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the route gate while reading
//! and writing shared state from Leptos context providers.

pub mod dashboard_layout;
pub mod notification_bell;
pub mod route_guard;
pub mod sidebar;
pub mod spinner;
