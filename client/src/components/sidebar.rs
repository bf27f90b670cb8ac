//! Dashboard sidebar: role-aware navigation, user card, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::mock::MockBackend;
use crate::state::routes::{is_active, nav_items};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::spawn_session_op;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<MockBackend>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let items = move || {
        session
            .with(|s| s.user.as_ref().map(|u| u.role))
            .map(nav_items)
            .unwrap_or_default()
    };

    // The route guard redirects to /login once the session turns anonymous.
    let on_logout = move |_| {
        spawn_session_op(session, backend.clone(), async |guard| guard.logout().await, |()| {});
    };

    view! {
        <Show when=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar-overlay" on:click=move |_| ui.update(UiState::close_sidebar)></div>
        </Show>
        <aside class="sidebar" class:is-open=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar__brand">
                <h1>"CCI"</h1>
                <button class="sidebar__close" on:click=move |_| ui.update(UiState::close_sidebar)>"✕"</button>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    let current = pathname.get();
                    items()
                        .into_iter()
                        .map(|item| {
                            let active = is_active(&item, &current);
                            view! {
                                <a
                                    href=item.route.path()
                                    class="sidebar__link"
                                    class:is-active=active
                                    on:click=move |_| ui.update(UiState::on_navigate)
                                >
                                    <span class="sidebar__icon">{item.icon}</span>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="sidebar__footer">
                {move || {
                    session
                        .get()
                        .user
                        .map(|u| {
                            view! {
                                <div class="sidebar__user">
                                    <img class="sidebar__avatar" src=u.avatar_url alt="Avatar"/>
                                    <div class="sidebar__user-text">
                                        <p class="sidebar__user-name">{u.name}</p>
                                        <p class="sidebar__user-role">{u.role.label()}</p>
                                    </div>
                                </div>
                            }
                        })
                }}
                <button class="btn btn--outline sidebar__logout" on:click=on_logout>"Выйти"</button>
            </div>
        </aside>
    }
}
