//! News and interviews.

use leptos::prelude::*;

use crate::net::catalog;

#[component]
pub fn MediaPage() -> impl IntoView {
    view! {
        <div class="media-page">
            <h2>"Медиа"</h2>
            <div class="card-grid">
                {catalog::news()
                    .iter()
                    .map(|a| {
                        view! {
                            <article class="card article-card">
                                <img class="card__image" src=a.image.clone() alt=a.title.clone()/>
                                <div class="card__body">
                                    <span class="article-card__category">{a.category.clone()}</span>
                                    <h3>{a.title.clone()}</h3>
                                    <p>{a.summary.clone()}</p>
                                    <p class="article-card__byline">{format!("{} · {}", a.author, a.date)}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
