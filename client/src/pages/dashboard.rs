//! Authenticated landing route: points, badges, and upcoming events.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::catalog;
use crate::net::types::{Badge, User};
use crate::state::session::SessionState;

/// Points needed to advance one level.
pub(crate) const POINTS_PER_LEVEL: u32 = 500;

/// Start of the current catalog season; earlier events are archived.
const SEASON_START: &str = "2023-11-01";

/// Level (starting at 1) and percent progress toward the next level.
pub(crate) fn level_progress(points: u32) -> (u32, u32) {
    (points / POINTS_PER_LEVEL + 1, points % POINTS_PER_LEVEL * 100 / POINTS_PER_LEVEL)
}

/// Every catalog badge paired with whether `user` has earned it.
pub(crate) fn badge_shelf(user: &User) -> Vec<(&'static Badge, bool)> {
    catalog::badges().iter().map(|b| (b, user.badges.iter().any(|owned| owned.id == b.id))).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user = move || session.get().user;

    view! {
        <div class="dashboard-page">
            {move || {
                user()
                    .map(|u| {
                        let (level, progress) = level_progress(u.points);
                        view! {
                            <section class="card card--welcome">
                                <h2>{format!("Привет, {}!", u.name)}</h2>
                                <p>{format!("Уровень {level} · {} баллов", u.points)}</p>
                                <div class="progress">
                                    <div class="progress__bar" style=format!("width: {progress}%")></div>
                                </div>
                            </section>
                            <section class="card">
                                <h3>"Мои бейджи"</h3>
                                <div class="badge-row">
                                    {badge_shelf(&u)
                                        .into_iter()
                                        .map(|(b, earned)| {
                                            view! {
                                                <span class="badge" class:is-done=earned title=b.description.clone()>
                                                    {b.icon.clone()}
                                                    " "
                                                    {b.name.clone()}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
            }}
            <section class="card">
                <h3>"Ближайшие события"</h3>
                <ul class="event-list">
                    {catalog::upcoming_events(SEASON_START)
                        .into_iter()
                        .map(|e| {
                            view! {
                                <li class="event-list__item">
                                    <span class="event-list__date">{e.date.clone()}</span>
                                    <span class="event-list__title">{e.title.clone()}</span>
                                    <span class="event-list__kind">{e.kind.label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
