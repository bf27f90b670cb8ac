//! Route gate applying `state::routes::decide` to the current session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::spinner::Spinner;
use crate::state::routes::{AppRoute, RouteDecision, decide};
use crate::state::session::SessionState;

/// Render `children` only when the session may see `route`.
///
/// While the startup restore is pending a spinner is shown and no redirect
/// is issued.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match session.with(|s| decide(route, s)) {
        RouteDecision::Pending => view! { <Spinner/> }.into_any(),
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(target) => {
            log::debug!("guard redirect {} -> {}", route.path(), target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}
