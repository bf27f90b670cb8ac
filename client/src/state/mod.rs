//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notifications`, `ui`) so each
//! component depends on a small focused model. `routes` holds the pure
//! routing policy evaluated against the session.

pub mod notifications;
pub mod routes;
pub mod session;
pub mod ui;
