//! Read-only content catalogs (badges, projects, events, courses, news).
//!
//! Built once per process on first access and never mutated afterwards.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use super::types::{
    Article, Badge, Comment, Course, CourseLevel, Event, EventKind, Project, ProjectCategory, ProjectStage,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn badge(id: &str, name: &str, icon: &str, description: &str) -> Badge {
    Badge { id: id.to_owned(), name: name.to_owned(), icon: icon.to_owned(), description: description.to_owned() }
}

static BADGES: LazyLock<Vec<Badge>> = LazyLock::new(|| {
    vec![
        badge("b1", "Первый Шаг", "🚀", "Создал первый проект"),
        badge("b2", "Командный Игрок", "🤝", "Вступил в команду"),
        badge("b3", "Герой Хакатона", "🏆", "Победил в хакатоне"),
        badge("b4", "Душа Компании", "🦋", "Активен в сообществе"),
    ]
});

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: "p1".to_owned(),
            title: "EcoCampus App".to_owned(),
            description: "Мобильное приложение для отслеживания и сокращения отходов на территории университета."
                .to_owned(),
            category: ProjectCategory::It,
            stage: ProjectStage::InProgress,
            author_id: "u2".to_owned(),
            author_name: "Алексей Чен".to_owned(),
            tags: strings(&["React Native", "Экология", "Mobile"]),
            likes: 24,
            image: "https://picsum.photos/400/300?random=1".to_owned(),
            comments: vec![Comment {
                id: "c1".to_owned(),
                author_name: "Мария И.".to_owned(),
                text: "Отличная инициатива!".to_owned(),
                date: "2023-10-12".to_owned(),
            }],
        },
        Project {
            id: "p2".to_owned(),
            title: "Инсталляция \"Свет Знаний\"".to_owned(),
            description: "Интерактивная световая скульптура для главного холла.".to_owned(),
            category: ProjectCategory::Design,
            stage: ProjectStage::Done,
            author_id: "u3".to_owned(),
            author_name: "Мария Родригес".to_owned(),
            tags: strings(&["Арт", "Arduino", "Свет"]),
            likes: 56,
            image: "https://picsum.photos/400/300?random=2".to_owned(),
            comments: Vec::new(),
        },
        Project {
            id: "p3".to_owned(),
            title: "AI Study Buddy".to_owned(),
            description: "Использование LLM для помощи студентам в конспектировании лекций.".to_owned(),
            category: ProjectCategory::Science,
            stage: ProjectStage::Idea,
            author_id: "u4".to_owned(),
            author_name: "Джеймс Смит".to_owned(),
            tags: strings(&["AI", "Python", "Образование"]),
            likes: 12,
            image: "https://picsum.photos/400/300?random=3".to_owned(),
            comments: Vec::new(),
        },
    ]
});

fn event(id: &str, title: &str, date: &str, kind: EventKind, description: &str, participants: u32, seed: u32) -> Event {
    Event {
        id: id.to_owned(),
        title: title.to_owned(),
        date: date.to_owned(),
        kind,
        description: description.to_owned(),
        participants,
        image: format!("https://picsum.photos/400/200?random={seed}"),
    }
}

static EVENTS: LazyLock<Vec<Event>> = LazyLock::new(|| {
    vec![
        event("e1", "Global Game Jam", "2023-11-15", EventKind::Hackathon, "48 часов на создание игры.", 120, 10),
        event("e2", "Основы UX/UI", "2023-11-20", EventKind::Workshop, "Изучаем основы Figma.", 45, 11),
        event(
            "e3",
            "Вечер Питчинга Стартапов",
            "2023-12-05",
            EventKind::Meetup,
            "Представь свою идею инвесторам.",
            80,
            12,
        ),
    ]
});

fn course(id: &str, title: &str, level: CourseLevel, duration: &str, tags: &[&str], seed: u32) -> Course {
    Course {
        id: id.to_owned(),
        title: title.to_owned(),
        level,
        duration: duration.to_owned(),
        tags: strings(tags),
        image: format!("https://picsum.photos/300/200?random={seed}"),
    }
}

static COURSES: LazyLock<Vec<Course>> = LazyLock::new(|| {
    vec![
        course("c1", "Введение в Дизайн-мышление", CourseLevel::Beginner, "2 часа", &["Дизайн", "Soft Skills"], 20),
        course("c2", "React для Начинающих", CourseLevel::Intermediate, "5 часов", &["IT", "Dev"], 21),
        course("c3", "Ораторское Искусство", CourseLevel::Beginner, "1 час", &["Soft Skills", "Лидерство"], 22),
    ]
});

static NEWS: LazyLock<Vec<Article>> = LazyLock::new(|| {
    vec![
        Article {
            id: "n1".to_owned(),
            title: "Университет выиграл грант на инновации".to_owned(),
            category: "Новости".to_owned(),
            summary: "Наш кампус-инкубатор был отмечен на национальном уровне.".to_owned(),
            author: "Админ".to_owned(),
            date: "1 нояб 2023".to_owned(),
            image: "https://picsum.photos/300/200?random=30".to_owned(),
        },
        Article {
            id: "n2".to_owned(),
            title: "Интервью: Сара Джонс".to_owned(),
            category: "Интервью".to_owned(),
            summary: "Как Сара запустила стартап прямо из общежития.".to_owned(),
            author: "Медиа Команда".to_owned(),
            date: "28 окт 2023".to_owned(),
            image: "https://picsum.photos/300/200?random=31".to_owned(),
        },
    ]
});

#[must_use]
pub fn badges() -> &'static [Badge] {
    &BADGES
}

#[must_use]
pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}

#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Projects in `category`, or every project when `None`.
#[must_use]
pub fn projects_in(category: Option<ProjectCategory>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

#[must_use]
pub fn events() -> &'static [Event] {
    &EVENTS
}

/// Events on or after `today` (`YYYY-MM-DD`), soonest first.
#[must_use]
pub fn upcoming_events(today: &str) -> Vec<&'static Event> {
    let mut upcoming: Vec<_> = EVENTS.iter().filter(|e| e.date.as_str() >= today).collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming
}

#[must_use]
pub fn courses() -> &'static [Course] {
    &COURSES
}

#[must_use]
pub fn news() -> &'static [Article] {
    &NEWS
}
