use super::*;

fn backend() -> MockBackend {
    MockBackend::new(MockConfig::instant("test_session"))
}

fn registration(name: &str, email: &str) -> Registration {
    Registration { name: Some(name.to_owned()), email: Some(email.to_owned()), ..Registration::default() }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Alex@CCI.edu "), Some("alex@cci.edu".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("no-at-sign"), None);
    assert_eq!(normalize_email("@cci.edu"), None);
    assert_eq!(normalize_email("alex@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// seed directory
// =============================================================================

#[test]
fn seed_directory_has_one_admin() {
    let users = backend().users();
    assert_eq!(users.iter().filter(|u| u.role == Role::Admin).count(), 1);
    assert!(users.iter().all(|u| u.skill_stats.len() == 5));
}

#[test]
fn fresh_backend_has_no_session() {
    assert!(backend().current_user().is_none());
}

// =============================================================================
// login / logout
// =============================================================================

#[tokio::test]
async fn login_known_email_sets_session() {
    let b = backend();
    let user = b.login("maria@cci.edu").await.unwrap();
    assert_eq!(user.id, "u3");
    assert_eq!(b.current_user().map(|u| u.id), Some("u3".to_owned()));
}

#[tokio::test]
async fn login_is_case_insensitive() {
    let b = backend();
    let user = b.login("MARIA@cci.edu").await.unwrap();
    assert_eq!(user.email, "maria@cci.edu");
}

#[tokio::test]
async fn login_unknown_email_returns_none_and_keeps_session() {
    let b = backend();
    b.login("alex@cci.edu").await.unwrap();
    assert!(b.login("nobody@cci.edu").await.is_none());
    assert_eq!(b.current_user().map(|u| u.id), Some("u2".to_owned()));
}

#[tokio::test]
async fn logout_clears_session() {
    let b = backend();
    b.login("alex@cci.edu").await.unwrap();
    b.logout().await;
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn clones_share_directory() {
    let b = backend();
    let other = b.clone();
    b.login("james@cci.edu").await.unwrap();
    assert_eq!(other.current_user().map(|u| u.id), Some("u4".to_owned()));
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_applies_defaults() {
    let b = backend();
    let user = b.register(registration(" Ольга ", "Olga@CCI.edu")).await.unwrap();
    assert_eq!(user.name, "Ольга");
    assert_eq!(user.email, "olga@cci.edu");
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.status, Status::Active);
    assert_eq!(user.points, 0);
    assert!(user.badges.is_empty());
    assert_eq!(user.skill_stats.len(), 5);
    assert!(user.avatar_url.contains("olga@cci.edu"));
    assert_eq!(b.current_user(), Some(user));
}

#[tokio::test]
async fn register_keeps_supplied_fields() {
    let b = backend();
    let data = Registration {
        role: Some(Role::Mentor),
        faculty: Some("Физика".to_owned()),
        graduation_year: Some(2027),
        skills: Some(vec!["Rust".to_owned()]),
        ..registration("Пётр", "petr@cci.edu")
    };
    let user = b.register(data).await.unwrap();
    assert_eq!(user.role, Role::Mentor);
    assert_eq!(user.faculty.as_deref(), Some("Физика"));
    assert_eq!(user.graduation_year, Some(2027));
    assert_eq!(user.skills, ["Rust"]);
}

#[tokio::test]
async fn registered_user_can_log_in_later() {
    let b = backend();
    let user = b.register(registration("Ольга", "olga@cci.edu")).await.unwrap();
    b.logout().await;
    assert_eq!(b.login("olga@cci.edu").await, Some(user));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let b = backend();
    let err = b.register(registration("Alex 2", "ALEX@cci.edu")).await.unwrap_err();
    assert_eq!(err, RegisterError::DuplicateEmail("alex@cci.edu".to_owned()));
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn register_rejects_invalid_email_and_missing_name() {
    let b = backend();
    assert_eq!(b.register(registration("X", "nope")).await.unwrap_err(), RegisterError::InvalidEmail);
    assert_eq!(b.register(registration("   ", "x@cci.edu")).await.unwrap_err(), RegisterError::MissingName);
    assert_eq!(b.register(Registration::default()).await.unwrap_err(), RegisterError::InvalidEmail);
}

// =============================================================================
// update_user
// =============================================================================

#[tokio::test]
async fn update_user_replaces_stored_identity() {
    let b = backend();
    let mut user = b.login("james@cci.edu").await.unwrap();
    user.bio = Some("Новое описание".to_owned());
    assert_eq!(b.update_user(user.clone()).await, Ok(user.clone()));
    assert_eq!(b.current_user(), Some(user.clone()));
    b.logout().await;
    assert_eq!(b.login("james@cci.edu").await, Some(user));
}

#[tokio::test]
async fn update_user_does_not_change_session() {
    let b = backend();
    b.login("alex@cci.edu").await.unwrap();
    let mut maria = b.users().into_iter().find(|u| u.id == "u3").unwrap();
    maria.points += 10;
    b.update_user(maria).await.unwrap();
    assert_eq!(b.current_user().map(|u| u.id), Some("u2".to_owned()));
}

#[tokio::test]
async fn update_user_rejects_email_of_another_user() {
    let b = backend();
    let mut james = b.login("james@cci.edu").await.unwrap();
    james.email = "Maria@CCI.edu".to_owned();
    assert_eq!(b.update_user(james).await, Err(UpdateError::DuplicateEmail("maria@cci.edu".to_owned())));
    assert_eq!(b.login("maria@cci.edu").await.map(|u| u.id), Some("u3".to_owned()));
    assert_eq!(b.login("james@cci.edu").await.map(|u| u.id), Some("u4".to_owned()));
}

#[tokio::test]
async fn update_user_normalizes_and_validates_email() {
    let b = backend();
    let mut james = b.login("james@cci.edu").await.unwrap();
    james.email = " James.Smith@CCI.edu ".to_owned();
    let stored = b.update_user(james.clone()).await.unwrap();
    assert_eq!(stored.email, "james.smith@cci.edu");
    assert_eq!(b.current_user(), Some(stored));

    james.email = "not-an-email".to_owned();
    assert_eq!(b.update_user(james).await, Err(UpdateError::InvalidEmail));
}
