//! Shared session wiring for routes and forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch the identity slot directly. They run guard
//! operations through `spawn_session_op`, which captures the current state,
//! applies one `SessionGuard` operation, and folds the result into the
//! signal with `settle`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::mock::MockBackend;
use crate::state::session::{SessionGuard, SessionState, settle};

/// Whether the login/register page should hand off to the dashboard.
#[must_use]
pub fn should_leave_auth_page(state: &SessionState) -> bool {
    state.is_authenticated()
}

/// Resolve the startup session once the app is running in the browser.
///
/// Effects do not run during SSR, so server-rendered HTML always shows the
/// loading phase and the hydrated client takes the routing decision.
pub fn install_session_restore(session: RwSignal<SessionState>, backend: MockBackend) {
    Effect::new(move || {
        if !session.get_untracked().loading {
            return;
        }
        let mut guard = SessionGuard::new(backend.clone());
        guard.restore();
        session.set(guard.into_state());
    });
}

/// Run one guard operation against the current session and publish the
/// resulting state before handing the operation's output to `on_done`.
///
/// Operations may overlap; the result is settled against the signal's value
/// at completion rather than written over it.
pub fn spawn_session_op<R, F, D>(session: RwSignal<SessionState>, backend: MockBackend, op: F, on_done: D)
where
    F: AsyncFnOnce(&mut SessionGuard<MockBackend>) -> R + 'static,
    D: FnOnce(R) + 'static,
    R: 'static,
{
    leptos::task::spawn_local(async move {
        let started_from = session.get_untracked();
        let mut guard = SessionGuard::with_state(backend, started_from.clone());
        let out = op(&mut guard).await;
        let outcome = guard.into_state();
        session.update(|current| *current = settle(current, &started_from, outcome));
        on_done(out);
    });
}
