use super::*;

#[test]
fn badges_are_seeded_with_unique_ids() {
    let ids: Vec<_> = badges().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["b1", "b2", "b3", "b4"]);
}

#[test]
fn badge_by_id_finds_and_misses() {
    assert_eq!(badge_by_id("b3").map(|b| b.name.as_str()), Some("Герой Хакатона"));
    assert!(badge_by_id("b99").is_none());
}

#[test]
fn projects_in_none_returns_all() {
    assert_eq!(projects_in(None).len(), projects().len());
}

#[test]
fn projects_in_filters_by_category() {
    let design = projects_in(Some(ProjectCategory::Design));
    assert_eq!(design.len(), 1);
    assert_eq!(design[0].id, "p2");
    assert!(projects_in(Some(ProjectCategory::Media)).is_empty());
}

#[test]
fn upcoming_events_sorted_and_filtered() {
    let upcoming = upcoming_events("2023-11-16");
    let ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e2", "e3"]);
}

#[test]
fn upcoming_events_includes_today() {
    let upcoming = upcoming_events("2023-12-05");
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, "e3");
}

#[test]
fn catalogs_are_stable_across_calls() {
    assert!(std::ptr::eq(courses(), courses()));
    assert_eq!(news().len(), 2);
}
