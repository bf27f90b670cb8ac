//! Profile page: view and edit the signed-in identity.
//!
//! Saving builds a complete `User` from the current identity plus the form
//! fields and hands it to `SessionGuard::update_user`; there are no partial
//! updates.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::mock::MockBackend;
use crate::net::types::{Status, User};
use crate::state::session::SessionState;
use crate::util::auth::spawn_session_op;

/// Editable profile fields as entered in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub name: String,
    pub faculty: String,
    pub bio: String,
    /// Comma-separated.
    pub skills: String,
    /// Comma-separated.
    pub interests: String,
    pub status: Status,
}

impl ProfileForm {
    pub(crate) fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            faculty: user.faculty.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            skills: user.skills.join(", "),
            interests: user.interests.join(", "),
            status: user.status,
        }
    }
}

/// Split a comma-separated list, dropping blanks and duplicates.
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_owned());
        }
    }
    tags
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// The identity that results from saving `form` over `user`.
///
/// A blank name keeps the previous name.
pub(crate) fn apply_profile_form(user: &User, form: &ProfileForm) -> User {
    User {
        name: optional(&form.name).unwrap_or_else(|| user.name.clone()),
        faculty: optional(&form.faculty),
        bio: optional(&form.bio),
        skills: parse_tags(&form.skills),
        interests: parse_tags(&form.interests),
        status: form.status,
        ..user.clone()
    }
}

fn status_from_value(value: &str) -> Status {
    match value {
        "open_to_work" => Status::OpenToWork,
        "busy" => Status::Busy,
        _ => Status::Active,
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<MockBackend>();

    let initial = session.with_untracked(|s| s.user.as_ref().map(ProfileForm::from_user).unwrap_or_default());
    let form = RwSignal::new(initial);
    let saved = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = session.get_untracked().user else {
            return;
        };
        let updated = apply_profile_form(&current, &form.get_untracked());
        spawn_session_op(
            session,
            backend.clone(),
            async move |guard| guard.update_user(updated).await,
            move |ok: bool| saved.set(ok),
        );
    };

    let text_field = move |label: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        saved.set(false);
                        form.update(|f| set(f, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="profile-page">
            {move || {
                session
                    .get()
                    .user
                    .map(|u| {
                        view! {
                            <section class="card profile-card">
                                <img class="profile-card__avatar" src=u.avatar_url alt="Avatar"/>
                                <h2>{u.name}</h2>
                                <p>{u.role.label()} " · " {u.status.label()}</p>
                                <p>{format!("{} баллов", u.points)}</p>
                                <ul class="skill-stats">
                                    {u
                                        .skill_stats
                                        .into_iter()
                                        .map(|s| {
                                            view! {
                                                <li>
                                                    {s.subject}
                                                    ": "
                                                    {format!("{}/{}", s.score, s.full_mark)}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
            }}
            <form class="card profile-form" on:submit=on_save>
                <h3>"Редактировать профиль"</h3>
                {text_field("Имя", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Факультет", |f| f.faculty.clone(), |f, v| f.faculty = v)}
                {text_field("О себе", |f| f.bio.clone(), |f, v| f.bio = v)}
                {text_field("Навыки (через запятую)", |f| f.skills.clone(), |f, v| f.skills = v)}
                {text_field("Интересы (через запятую)", |f| f.interests.clone(), |f, v| f.interests = v)}
                <label class="form-field">
                    <span>"Статус"</span>
                    <select on:change=move |ev| {
                        let status = status_from_value(&event_target_value(&ev));
                        form.update(|f| f.status = status);
                    }>
                        {[
                            ("active", Status::Active),
                            ("open_to_work", Status::OpenToWork),
                            ("busy", Status::Busy),
                        ]
                            .into_iter()
                            .map(|(value, status)| {
                                view! {
                                    <option value=value selected=move || form.with(|f| f.status == status)>
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit">"Сохранить"</button>
                <Show when=move || saved.get()>
                    <p class="form-message">"Сохранено"</p>
                </Show>
            </form>
        </div>
    }
}
