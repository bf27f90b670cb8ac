//! Event calendar listing.

use leptos::prelude::*;

use crate::net::catalog;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <div class="events-page">
            <h2>"События"</h2>
            <div class="card-grid">
                {catalog::upcoming_events("")
                    .into_iter()
                    .map(|e| {
                        view! {
                            <article class="card event-card">
                                <img class="card__image" src=e.image.clone() alt=e.title.clone()/>
                                <div class="card__body">
                                    <span class="event-card__kind">{e.kind.label()}</span>
                                    <h3>{e.title.clone()}</h3>
                                    <p class="event-card__date">{e.date.clone()}</p>
                                    <p>{e.description.clone()}</p>
                                    <p class="event-card__participants">
                                        {format!("{} участников", e.participants)}
                                    </p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
