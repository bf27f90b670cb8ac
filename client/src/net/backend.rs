//! Backend collaborator contract consumed by the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Today the only implementation is `mock::MockBackend`. A REST-backed
//! implementation can replace it without touching the guard or the routes.

use super::types::{Registration, User};

/// Why a registration was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("name is required")]
    MissingName,
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
}

/// Why an identity update was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("email belongs to another user: {0}")]
    DuplicateEmail(String),
}

/// Identity operations the session guard delegates to.
///
/// Futures are not required to be `Send`: every call runs on the browser's
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Identity restored from a persisted session marker, if any.
    fn current_user(&self) -> Option<User>;

    /// Resolve the identity registered under `email`.
    async fn login(&self, email: &str) -> Option<User>;

    /// Create an identity from partial data and mark it as the session user.
    async fn register(&self, data: Registration) -> Result<User, RegisterError>;

    /// Clear the persisted session marker.
    async fn logout(&self);

    /// Persist `user` wholesale, replacing the stored identity with the same
    /// id. Returns the identity as stored.
    async fn update_user(&self, user: User) -> Result<User, UpdateError>;
}
