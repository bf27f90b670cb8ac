//! Authenticated page frame: sidebar, header with notifications, content.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="dashboard">
            <Sidebar/>
            <div class="dashboard__body">
                <header class="dashboard__header">
                    <button class="dashboard__menu" on:click=move |_| ui.update(UiState::open_sidebar)>"☰"</button>
                    <span class="dashboard__title">"CCI Platform"</span>
                    <div class="dashboard__actions">
                        <NotificationBell/>
                    </div>
                </header>
                <main class="dashboard__main">
                    <div class="dashboard__content">{children()}</div>
                </main>
            </div>
        </div>
    }
}
