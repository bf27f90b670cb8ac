//! Member directory built from the backend's user list.

use leptos::prelude::*;

use crate::net::mock::MockBackend;
use crate::state::session::SessionState;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<MockBackend>();

    let members = move || {
        let self_id = session.with(|s| s.user.as_ref().map(|u| u.id.clone()));
        backend
            .users()
            .into_iter()
            .filter(|u| Some(&u.id) != self_id.as_ref())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="community-page">
            <h2>"Сообщество"</h2>
            <div class="card-grid">
                {move || {
                    members()
                        .into_iter()
                        .map(|u| {
                            view! {
                                <article class="card member-card">
                                    <img class="member-card__avatar" src=u.avatar_url alt="Avatar"/>
                                    <h3>{u.name}</h3>
                                    <p>{u.role.label()} " · " {u.status.label()}</p>
                                    <p>{u.faculty.unwrap_or_default()}</p>
                                    <div class="tag-row">
                                        {u
                                            .skills
                                            .into_iter()
                                            .map(|s| view! { <span class="tag">{s}</span> })
                                            .collect_view()}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
