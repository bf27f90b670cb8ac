//! Login and registration page.
//!
//! Both modes submit through the session guard; a `false` outcome shows a
//! generic failure message. A visitor who is already signed in is handed to
//! the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

use crate::net::mock::MockBackend;
use crate::net::types::Registration;
use crate::state::routes::AppRoute;
use crate::state::session::SessionState;
use crate::util::auth::{should_leave_auth_page, spawn_session_op};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

const MSG_EMAIL_REQUIRED: &str = "Введите email.";
const MSG_NAME_REQUIRED: &str = "Введите имя.";
const MSG_LOGIN_FAILED: &str = "Не удалось войти. Проверьте email.";
const MSG_REGISTER_FAILED: &str = "Не удалось зарегистрироваться. Возможно, email уже занят.";

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Trimmed email for a login attempt.
pub(crate) fn validate_login_input(email: &str) -> Result<String, &'static str> {
    non_empty(email).ok_or(MSG_EMAIL_REQUIRED)
}

/// Registration payload from the form fields. Faculty is optional.
pub(crate) fn build_registration(name: &str, email: &str, faculty: &str) -> Result<Registration, &'static str> {
    let name = non_empty(name).ok_or(MSG_NAME_REQUIRED)?;
    let email = non_empty(email).ok_or(MSG_EMAIL_REQUIRED)?;
    Ok(Registration { name: Some(name), email: Some(email), faculty: non_empty(faculty), ..Registration::default() })
}

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<MockBackend>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let faculty = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let on_done = move |ok: bool| {
            busy.set(false);
            if !ok {
                info.set(if mode == AuthMode::Login { MSG_LOGIN_FAILED } else { MSG_REGISTER_FAILED }.to_owned());
            }
        };
        match mode {
            AuthMode::Login => match validate_login_input(&email.get()) {
                Ok(email_value) => {
                    busy.set(true);
                    info.set(String::new());
                    spawn_session_op(session, backend.clone(), async move |guard| guard.login(&email_value).await, on_done);
                }
                Err(msg) => info.set(msg.to_owned()),
            },
            AuthMode::Register => match build_registration(&name.get(), &email.get(), &faculty.get()) {
                Ok(data) => {
                    busy.set(true);
                    info.set(String::new());
                    spawn_session_op(session, backend.clone(), async move |guard| guard.register(data).await, on_done);
                }
                Err(msg) => info.set(msg.to_owned()),
            },
        }
    };

    let (title, submit_label, switch_label, switch_route) = match mode {
        AuthMode::Login => ("Вход", "Войти", "Нет аккаунта? Зарегистрируйтесь", AppRoute::Register),
        AuthMode::Register => ("Регистрация", "Создать аккаунт", "Уже есть аккаунт? Войдите", AppRoute::Login),
    };

    view! {
        {move || {
            should_leave_auth_page(&session.get())
                .then(|| view! { <Redirect path=AppRoute::Dashboard.path()/> })
        }}
        <div class="auth-page">
            <div class="auth-card">
                <h1>"CCI"</h1>
                <p class="auth-card__subtitle">{title}</p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode == AuthMode::Register>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Имя и фамилия"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@cci.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || mode == AuthMode::Register>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Факультет (необязательно)"
                            prop:value=move || faculty.get()
                            on:input=move |ev| faculty.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "..." } else { submit_label }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <A href=switch_route.path()>{switch_label}</A>
            </div>
        </div>
    }
}
