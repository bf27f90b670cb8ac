//! Full-height loading indicator shown while the session restore is pending.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-page" role="status" aria-live="polite">
            <span class="spinner"></span>
            <span class="visually-hidden">"Загрузка..."</span>
        </div>
    }
}
