//! In-memory backend standing in for the future identity API.
//!
//! DESIGN
//! ======
//! A seeded user directory plus a session marker (the id of the signed-in
//! user) behind a `Mutex`, so the backend can live in Leptos context. The lock
//! is only taken after the simulated latency has elapsed and is released
//! before returning, never held across an await.
//!
//! In the browser the marker is mirrored to `localStorage` so a reload
//! restores the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::backend::{Backend, RegisterError, UpdateError};
use super::catalog;
use super::types::{Badge, Registration, Role, SocialLinks, Status, User, skill_stats};
use crate::config::MockConfig;
use crate::util::storage;

/// Lowercase and sanity-check an email address.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

fn default_avatar(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={email}")
}

#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    /// Id of the signed-in user.
    session: Option<String>,
}

impl Directory {
    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Whether `email` is taken by a user other than `id`.
    fn email_taken_by_other(&self, email: &str, id: &str) -> bool {
        self.find_by_email(email).is_some_and(|u| u.id != id)
    }

    fn upsert(&mut self, user: User) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user,
            None => self.users.push(user),
        }
    }

    fn session_user(&self) -> Option<&User> {
        let id = self.session.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }
}

/// Mock implementation of [`Backend`].
#[derive(Clone, Debug)]
pub struct MockBackend {
    inner: Arc<Mutex<Directory>>,
    config: MockConfig,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockBackend {
    /// Backend seeded with the demo directory. A stored session marker, if
    /// present, is merged into the directory and becomes the session user.
    #[must_use]
    pub fn new(config: MockConfig) -> Self {
        let mut directory = Directory { users: seed_users(), session: None };
        if let Some(stored) = storage::read_session(&config.session_key) {
            directory.session = Some(stored.id.clone());
            directory.upsert(stored);
        }
        Self { inner: Arc::new(Mutex::new(directory)), config }
    }

    /// Snapshot of every known user, in registration order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn simulate_latency(&self) {
        #[cfg(feature = "hydrate")]
        if !self.config.latency.is_zero() {
            gloo_timers::future::sleep(self.config.latency).await;
        }
    }

    fn persist_session(&self, user: Option<&User>) {
        storage::write_session(&self.config.session_key, user);
    }
}

impl Backend for MockBackend {
    fn current_user(&self) -> Option<User> {
        self.lock().session_user().cloned()
    }

    async fn login(&self, email: &str) -> Option<User> {
        self.simulate_latency().await;
        let email = normalize_email(email)?;
        let user = {
            let mut dir = self.lock();
            let user = dir.find_by_email(&email)?.clone();
            dir.session = Some(user.id.clone());
            user
        };
        self.persist_session(Some(&user));
        Some(user)
    }

    async fn register(&self, data: Registration) -> Result<User, RegisterError> {
        self.simulate_latency().await;
        let email = data
            .email
            .as_deref()
            .and_then(normalize_email)
            .ok_or(RegisterError::InvalidEmail)?;
        let name = data
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(RegisterError::MissingName)?
            .to_owned();

        let user = {
            let mut dir = self.lock();
            if dir.find_by_email(&email).is_some() {
                return Err(RegisterError::DuplicateEmail(email));
            }
            let user = User {
                id: format!("u-{}", uuid::Uuid::new_v4().simple()),
                name,
                avatar_url: data.avatar_url.unwrap_or_else(|| default_avatar(&email)),
                email,
                role: data.role.unwrap_or_default(),
                faculty: data.faculty,
                graduation_year: data.graduation_year,
                skills: data.skills.unwrap_or_default(),
                interests: data.interests.unwrap_or_default(),
                bio: data.bio,
                status: data.status.unwrap_or_default(),
                badges: Vec::new(),
                points: 0,
                completed_courses: Vec::new(),
                social_links: data.social_links,
                skill_stats: skill_stats([0; 5]),
            };
            dir.session = Some(user.id.clone());
            dir.users.push(user.clone());
            user
        };
        self.persist_session(Some(&user));
        Ok(user)
    }

    async fn logout(&self) {
        self.lock().session = None;
        self.persist_session(None);
    }

    async fn update_user(&self, user: User) -> Result<User, UpdateError> {
        self.simulate_latency().await;
        let email = normalize_email(&user.email).ok_or(UpdateError::InvalidEmail)?;
        let user = User { email, ..user };
        let is_session_user = {
            let mut dir = self.lock();
            if dir.email_taken_by_other(&user.email, &user.id) {
                return Err(UpdateError::DuplicateEmail(user.email));
            }
            let is_session_user = dir.session.as_deref() == Some(user.id.as_str());
            dir.upsert(user.clone());
            is_session_user
        };
        if is_session_user {
            self.persist_session(Some(&user));
        }
        Ok(user)
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

fn seed_badges(ids: &[&str]) -> Vec<Badge> {
    ids.iter().filter_map(|id| catalog::badge_by_id(id)).cloned().collect()
}

fn seed_user(id: &str, name: &str, email: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        avatar_url: default_avatar(email),
        faculty: None,
        graduation_year: None,
        skills: Vec::new(),
        interests: Vec::new(),
        bio: None,
        status: Status::Active,
        badges: Vec::new(),
        points: 0,
        completed_courses: Vec::new(),
        social_links: None,
        skill_stats: skill_stats([0; 5]),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Demo directory: one admin, one mentor, two students (the catalog authors).
fn seed_users() -> Vec<User> {
    let admin = User {
        faculty: Some("Администрация".to_owned()),
        bio: Some("Координатор центра креативных индустрий.".to_owned()),
        points: 0,
        ..seed_user("u1", "Ирина Волкова", "admin@cci.edu", Role::Admin)
    };
    let alex = User {
        faculty: Some("Информатика".to_owned()),
        graduation_year: Some(2025),
        skills: to_strings(&["React Native", "TypeScript", "UX"]),
        interests: to_strings(&["Экология", "Стартапы"]),
        bio: Some("Делаю приложения, которые помогают кампусу.".to_owned()),
        status: Status::OpenToWork,
        badges: seed_badges(&["b1", "b2"]),
        points: 1250,
        completed_courses: to_strings(&["c1"]),
        social_links: Some(SocialLinks {
            github: Some("https://github.com/alexchen".to_owned()),
            telegram: Some("@alexchen".to_owned()),
            ..SocialLinks::default()
        }),
        skill_stats: skill_stats([85, 60, 55, 70, 40]),
        ..seed_user("u2", "Алексей Чен", "alex@cci.edu", Role::Student)
    };
    let maria = User {
        faculty: Some("Дизайн".to_owned()),
        skills: to_strings(&["Arduino", "Свет", "Инсталляции"]),
        interests: to_strings(&["Медиа-арт"]),
        status: Status::Busy,
        badges: seed_badges(&["b1", "b3", "b4"]),
        points: 2100,
        completed_courses: to_strings(&["c1", "c3"]),
        skill_stats: skill_stats([45, 95, 80, 75, 30]),
        ..seed_user("u3", "Мария Родригес", "maria@cci.edu", Role::Mentor)
    };
    let james = User {
        faculty: Some("Прикладная математика".to_owned()),
        graduation_year: Some(2026),
        skills: to_strings(&["Python", "ML"]),
        interests: to_strings(&["AI", "Образование"]),
        points: 300,
        skill_stats: skill_stats([70, 20, 30, 40, 90]),
        ..seed_user("u4", "Джеймс Смит", "james@cci.edu", Role::Student)
    };
    vec![admin, alex, maria, james]
}
