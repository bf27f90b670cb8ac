//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. Access control is applied in `app` via `Guarded`, never
//! inside a page.

pub mod about;
pub mod admin;
pub mod auth;
pub mod community;
pub mod dashboard;
pub mod events;
pub mod landing;
pub mod learning;
pub mod media;
pub mod profile;
pub mod projects;
