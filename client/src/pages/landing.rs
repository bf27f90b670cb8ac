//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::catalog;
use crate::state::routes::AppRoute;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing__nav">
                <span class="landing__brand">"CCI"</span>
                <A href=AppRoute::About.path()>"О нас"</A>
                <A href=AppRoute::Login.path()>"Войти"</A>
            </header>
            <section class="landing__hero">
                <h1>"Центр креативных индустрий"</h1>
                <p>"Проекты, события и обучение для студентов в одном месте."</p>
                <A href=AppRoute::Register.path()>"Присоединиться"</A>
            </section>
            <section class="landing__stats">
                <div class="stat">
                    <span class="stat__value">{catalog::projects().len()}</span>
                    <span class="stat__label">"проектов"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{catalog::events().len()}</span>
                    <span class="stat__label">"событий"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{catalog::courses().len()}</span>
                    <span class="stat__label">"курсов"</span>
                </div>
            </section>
        </div>
    }
}
