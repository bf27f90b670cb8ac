use super::*;

// =============================================================
// Role / Status
// =============================================================

#[test]
fn role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn role_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
    assert_eq!(serde_json::to_value(Status::OpenToWork).unwrap(), serde_json::json!("open_to_work"));
}

#[test]
fn role_labels_are_distinct() {
    assert_ne!(Role::Student.label(), Role::Mentor.label());
    assert_ne!(Role::Mentor.label(), Role::Admin.label());
}

#[test]
fn role_rejects_unknown_tag() {
    let parsed = serde_json::from_value::<Role>(serde_json::json!("superuser"));
    assert!(parsed.is_err());
}

// =============================================================
// skill_stats
// =============================================================

#[test]
fn skill_stats_has_fixed_size_in_subject_order() {
    let stats = skill_stats([10, 20, 30, 40, 50]);
    assert_eq!(stats.len(), SKILL_STAT_COUNT);
    for (stat, subject) in stats.iter().zip(SKILL_SUBJECTS) {
        assert_eq!(stat.subject, subject);
        assert_eq!(stat.full_mark, SKILL_FULL_MARK);
    }
    assert_eq!(stats[4].score, 50);
}

#[test]
fn skill_stats_clamps_to_full_mark() {
    let stats = skill_stats([250, 0, 0, 0, 0]);
    assert_eq!(stats[0].score, SKILL_FULL_MARK);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_has_completed_checks_course_ids() {
    let json = serde_json::json!({
        "id": "u9",
        "name": "Test",
        "email": "t@cci.edu",
        "role": "mentor",
        "avatar_url": "https://example.com/a.png",
        "faculty": null,
        "graduation_year": 2026,
        "skills": [],
        "interests": [],
        "bio": null,
        "status": "busy",
        "badges": [],
        "points": 5,
        "completed_courses": ["c2"],
        "social_links": null,
        "skill_stats": []
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.role, Role::Mentor);
    assert_eq!(user.status, Status::Busy);
    assert!(user.has_completed("c2"));
    assert!(!user.has_completed("c1"));
}

#[test]
fn registration_default_is_all_none() {
    let reg = Registration::default();
    assert!(reg.name.is_none());
    assert!(reg.email.is_none());
    assert!(reg.role.is_none());
}

#[test]
fn project_category_all_covers_every_label() {
    let labels: Vec<_> = ProjectCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["IT", "Дизайн", "Наука", "Социальное", "Медиа"]);
}
