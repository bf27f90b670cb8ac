//! Admin overview of the user directory. Reachable only with `Role::Admin`.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::mock::MockBackend;
use crate::net::types::{Role, User};

/// Number of users per role, in `Student, Mentor, Admin` order.
pub(crate) fn role_counts(users: &[User]) -> [(Role, usize); 3] {
    [Role::Student, Role::Mentor, Role::Admin].map(|role| (role, users.iter().filter(|u| u.role == role).count()))
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let backend = expect_context::<MockBackend>();
    let users = backend.users();
    let counts = role_counts(&users);

    view! {
        <div class="admin-page">
            <h2>"Администрирование"</h2>
            <div class="stat-row">
                {counts
                    .into_iter()
                    .map(|(role, n)| {
                        view! {
                            <div class="card stat">
                                <span class="stat__value">{n}</span>
                                <span class="stat__label">{role.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Имя"</th>
                        <th>"Email"</th>
                        <th>"Роль"</th>
                        <th>"Баллы"</th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|u| {
                            view! {
                                <tr>
                                    <td>{u.name}</td>
                                    <td>{u.email}</td>
                                    <td>{u.role.label()}</td>
                                    <td>{u.points}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
