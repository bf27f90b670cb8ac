//! Project showcase with category filter.

use leptos::prelude::*;

use crate::net::catalog;
use crate::net::types::ProjectCategory;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(None::<ProjectCategory>);

    let filter_button = move |label: &'static str, value: Option<ProjectCategory>| {
        view! {
            <button
                class="chip"
                class:is-active=move || filter.get() == value
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="projects-page">
            <h2>"Проекты"</h2>
            <div class="chip-row">
                {filter_button("Все", None)}
                {ProjectCategory::ALL
                    .into_iter()
                    .map(|c| filter_button(c.label(), Some(c)))
                    .collect_view()}
            </div>
            <div class="card-grid">
                {move || {
                    catalog::projects_in(filter.get())
                        .into_iter()
                        .map(|p| {
                            view! {
                                <article class="card project-card">
                                    <img class="card__image" src=p.image.clone() alt=p.title.clone()/>
                                    <div class="card__body">
                                        <span class="project-card__category">
                                            {p.category.icon()} " " {p.category.label()}
                                        </span>
                                        <span class="project-card__stage">{p.stage.label()}</span>
                                        <h3>{p.title.clone()}</h3>
                                        <p>{p.description.clone()}</p>
                                        <p class="project-card__author">{p.author_name.clone()}</p>
                                        <div class="tag-row">
                                            {p
                                                .tags
                                                .iter()
                                                .map(|t| view! { <span class="tag">{t.clone()}</span> })
                                                .collect_view()}
                                        </div>
                                        <p class="project-card__meta">
                                            {format!("❤ {} · 💬 {}", p.likes, p.comments.len())}
                                        </p>
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
