//! Shared DTOs for the identity model and the content catalogs.
//!
//! DESIGN
//! ======
//! These types are what a future API would put on the wire, so they derive
//! serde and use stable `snake_case` tags. Display labels live on the enums
//! rather than in the serialized form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Number of skill-rating pairs shown on the profile radar.
pub const SKILL_STAT_COUNT: usize = 5;

/// Subjects of the profile radar, in display order.
pub const SKILL_SUBJECTS: [&str; SKILL_STAT_COUNT] = ["Код", "Дизайн", "Лидерство", "Коммуникация", "Наука"];

/// Upper bound of every skill rating.
pub const SKILL_FULL_MARK: u32 = 100;

// =============================================================================
// IDENTITY
// =============================================================================

/// Role of an identity. Route access is decided by matching on this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Mentor,
    Admin,
}

impl Role {
    /// Human-readable label shown under the avatar in the sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Студент",
            Self::Mentor => "Ментор",
            Self::Admin => "Админ",
        }
    }
}

/// Availability status shown on the profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Active,
    OpenToWork,
    Busy,
}

impl Status {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Активен",
            Self::OpenToWork => "Открыт к предложениям",
            Self::Busy => "Занят",
        }
    }
}

/// An achievement badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    /// Emoji glyph rendered in place of an image.
    pub icon: String,
    pub description: String,
}

/// Optional external profile links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub behance: Option<String>,
    pub telegram: Option<String>,
}

/// One axis of the profile radar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStat {
    pub subject: String,
    pub score: u32,
    pub full_mark: u32,
}

/// An authenticated identity, owned by the session guard while signed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, stored lowercased.
    pub email: String,
    pub role: Role,
    /// Avatar image URL.
    pub avatar_url: String,
    pub faculty: Option<String>,
    pub graduation_year: Option<u16>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub bio: Option<String>,
    pub status: Status,
    pub badges: Vec<Badge>,
    /// Gamification point total.
    pub points: u32,
    /// Ids of courses from the learning catalog.
    pub completed_courses: Vec<String>,
    pub social_links: Option<SocialLinks>,
    /// Always `SKILL_STAT_COUNT` entries, one per `SKILL_SUBJECTS` item.
    pub skill_stats: Vec<SkillStat>,
}

impl User {
    /// Whether the user finished the given course.
    #[must_use]
    pub fn has_completed(&self, course_id: &str) -> bool {
        self.completed_courses.iter().any(|id| id == course_id)
    }
}

/// Build the radar ratings from scores in `SKILL_SUBJECTS` order.
#[must_use]
pub fn skill_stats(scores: [u32; SKILL_STAT_COUNT]) -> Vec<SkillStat> {
    SKILL_SUBJECTS
        .iter()
        .zip(scores)
        .map(|(subject, score)| SkillStat {
            subject: (*subject).to_owned(),
            score: score.min(SKILL_FULL_MARK),
            full_mark: SKILL_FULL_MARK,
        })
        .collect()
}

/// Partial identity submitted by the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar_url: Option<String>,
    pub faculty: Option<String>,
    pub graduation_year: Option<u16>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub bio: Option<String>,
    pub status: Option<Status>,
    pub social_links: Option<SocialLinks>,
}

// =============================================================================
// CATALOGS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    It,
    Design,
    Science,
    Social,
    Media,
}

impl ProjectCategory {
    pub const ALL: [Self; 5] = [Self::It, Self::Design, Self::Science, Self::Social, Self::Media];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Design => "Дизайн",
            Self::Science => "Наука",
            Self::Social => "Социальное",
            Self::Media => "Медиа",
        }
    }

    /// Emoji used as the category marker on project cards.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::It => "💻",
            Self::Design => "🎨",
            Self::Science => "🔬",
            Self::Social => "❤️",
            Self::Media => "📰",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    Idea,
    InProgress,
    Done,
}

impl ProjectStage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idea => "Идея",
            Self::InProgress => "В работе",
            Self::Done => "Завершен",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_name: String,
    pub text: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub stage: ProjectStage,
    pub author_id: String,
    pub author_name: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub image: String,
    pub comments: Vec<Comment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Hackathon,
    Workshop,
    Meetup,
    Lecture,
}

impl EventKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hackathon => "Хакатон",
            Self::Workshop => "Воркшоп",
            Self::Meetup => "Митап",
            Self::Lecture => "Лекция",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO date (`YYYY-MM-DD`); lexical order is chronological.
    pub date: String,
    pub kind: EventKind,
    pub description: String,
    pub participants: u32,
    pub image: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Новичок",
            Self::Intermediate => "Средний",
            Self::Advanced => "Продвинутый",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub level: CourseLevel,
    pub duration: String,
    pub tags: Vec<String>,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub author: String,
    pub date: String,
    pub image: String,
}
