//! Public about page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::routes::AppRoute;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"О платформе CCI"</h1>
            <p>
                "CCI объединяет студентов, менторов и партнёров университета: "
                "публикуйте проекты, участвуйте в хакатонах и проходите короткие курсы."
            </p>
            <A href=AppRoute::Landing.path()>"На главную"</A>
        </div>
    }
}
