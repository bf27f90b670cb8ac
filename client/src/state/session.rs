//! Session guard: the current identity and the operations that change it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the plain data held in a `RwSignal` and read by route
//! guards and the dashboard shell. `SessionGuard` pairs that state with a
//! [`Backend`] for the duration of one operation; it is the only code that
//! writes the identity slot.
//!
//! STATE MACHINE
//! =============
//! `Loading` -> `Anonymous | Authenticated` on startup restore.
//! `Anonymous` -> `Authenticated` on successful login or register.
//! `Authenticated` -> `Anonymous` on logout.
//! `Authenticated` -> `Authenticated` on update (payload only, same id).
//!
//! CONCURRENCY
//! ===========
//! Operations run from spawned browser tasks and may overlap. Each task
//! works on a copy of the state taken when it started; `settle` folds the
//! finished copy into whatever the signal holds by then, so a late update
//! cannot resurrect an identity that a logout already cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::backend::Backend;
use crate::net::types::{Registration, User};

/// Coarse session phase used by routing decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup restore has not resolved yet.
    Loading,
    Anonymous,
    Authenticated,
}

/// Session data: zero or one current identity plus the loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// The startup state: no identity, restore pending.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// A resolved state holding `user`.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.loading) {
            (_, true) => SessionPhase::Loading,
            (None, false) => SessionPhase::Anonymous,
            (Some(_), false) => SessionPhase::Authenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }
}

/// Backend plus session state, driving every identity transition.
pub struct SessionGuard<B> {
    backend: B,
    state: SessionState,
}

impl<B: Backend> SessionGuard<B> {
    /// Guard in the startup `Loading` phase.
    pub fn new(backend: B) -> Self {
        Self { backend, state: SessionState::default() }
    }

    /// Resume a guard over previously captured state.
    pub fn with_state(backend: B, state: SessionState) -> Self {
        Self { backend, state }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Resolve the startup phase from the backend's persisted session.
    pub fn restore(&mut self) -> SessionPhase {
        self.state = SessionState::resolved(self.backend.current_user());
        let phase = self.state.phase();
        log::debug!("session restored: {phase:?}");
        phase
    }

    /// Sign in as the identity registered under `email`.
    ///
    /// Returns `false` and leaves the state untouched when the backend knows
    /// no such identity.
    pub async fn login(&mut self, email: &str) -> bool {
        match self.backend.login(email).await {
            Some(user) => {
                log::info!("login succeeded for user {}", user.id);
                self.state = SessionState::resolved(Some(user));
                true
            }
            None => {
                log::warn!("login rejected");
                false
            }
        }
    }

    /// Create an identity from `data` and sign in as it.
    ///
    /// Returns `false` and leaves the state untouched when the backend
    /// refuses the registration.
    pub async fn register(&mut self, data: Registration) -> bool {
        match self.backend.register(data).await {
            Ok(user) => {
                log::info!("registered user {}", user.id);
                self.state = SessionState::resolved(Some(user));
                true
            }
            Err(e) => {
                log::warn!("registration rejected: {e}");
                false
            }
        }
    }

    /// Clear the identity and the backend session marker unconditionally.
    pub async fn logout(&mut self) {
        self.backend.logout().await;
        self.state = SessionState::resolved(None);
        log::info!("logged out");
    }

    /// Overwrite the current identity in the backend and locally.
    ///
    /// Only the signed-in identity may be updated: returns `false` and leaves
    /// the state untouched when nobody is signed in, when `user` carries a
    /// different id, or when the backend refuses the new payload.
    pub async fn update_user(&mut self, user: User) -> bool {
        if self.user().map(|u| u.id.as_str()) != Some(user.id.as_str()) {
            log::warn!("update rejected: not the signed-in identity");
            return false;
        }
        match self.backend.update_user(user).await {
            Ok(stored) => {
                self.state = SessionState::resolved(Some(stored));
                true
            }
            Err(e) => {
                log::warn!("update rejected: {e}");
                false
            }
        }
    }
}

fn user_id(state: &SessionState) -> Option<&str> {
    state.user.as_ref().map(|u| u.id.as_str())
}

/// Fold the result of one operation into the state current at completion.
///
/// `started_from` is the copy the operation began with and `outcome` the
/// copy it finished with.
///
/// - Nothing changed underneath: `outcome` wins.
/// - The operation was a no-op: `current` stays.
/// - The operation switched identity (login, register, logout): `outcome`
///   wins, the latest identity transition is authoritative.
/// - The operation kept the identity (update): it applies only while that
///   identity is still the current one.
#[must_use]
pub fn settle(current: &SessionState, started_from: &SessionState, outcome: SessionState) -> SessionState {
    if current == started_from {
        return outcome;
    }
    if &outcome == started_from {
        return current.clone();
    }
    if user_id(&outcome) != user_id(started_from) || user_id(current) == user_id(&outcome) {
        return outcome;
    }
    log::debug!("dropping stale session update");
    current.clone()
}
