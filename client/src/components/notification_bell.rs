//! Header bell with unread marker and notification dropdown.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| ui.update(UiState::toggle_notifications);
    let on_mark_all = move |_| notifications.update(NotificationsState::mark_all_read);

    view! {
        <div class="notif">
            <button class="notif__bell" on:click=on_toggle aria-label="Уведомления">
                "🔔"
                <Show when=move || notifications.with(NotificationsState::has_unread)>
                    <span class="notif__dot"></span>
                </Show>
            </button>
            <Show when=move || ui.with(|u| u.notifications_open)>
                <div class="notif__dropdown">
                    <div class="notif__title">"Уведомления"</div>
                    {move || {
                        notifications
                            .get()
                            .items
                            .into_iter()
                            .map(|n| {
                                let id = n.id;
                                view! {
                                    <div
                                        class="notif__item"
                                        class:is-unread={!n.read}
                                        on:click=move |_| notifications.update(|s| s.mark_read(id))
                                    >
                                        <p class="notif__text">{n.text}</p>
                                        <p class="notif__time">{n.time}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    <button class="notif__mark-all" on:click=on_mark_all>
                        "Пометить все как прочитанные"
                    </button>
                </div>
            </Show>
        </div>
    }
}
