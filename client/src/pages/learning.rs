//! Course catalog; courses the user finished are marked.

use leptos::prelude::*;

use crate::net::catalog;
use crate::state::session::SessionState;

#[component]
pub fn LearningPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="learning-page">
            <h2>"Обучение"</h2>
            <div class="card-grid">
                {move || {
                    catalog::courses()
                        .iter()
                        .map(|c| {
                            let done = session.with(|s| s.user.as_ref().is_some_and(|u| u.has_completed(&c.id)));
                            view! {
                                <article class="card course-card" class:is-done=done>
                                    <img class="card__image" src=c.image.clone() alt=c.title.clone()/>
                                    <div class="card__body">
                                        <span class="course-card__level">{c.level.label()}</span>
                                        <h3>{c.title.clone()}</h3>
                                        <p>{c.duration.clone()}</p>
                                        <Show when=move || done>
                                            <span class="course-card__done">"✓ Пройден"</span>
                                        </Show>
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
