use super::*;
use crate::config::MockConfig;
use crate::net::mock::MockBackend;
use crate::net::types::Role;

fn backend() -> MockBackend {
    MockBackend::new(MockConfig::instant("session_test"))
}

fn registration(name: &str, email: &str) -> Registration {
    Registration { name: Some(name.to_owned()), email: Some(email.to_owned()), ..Registration::default() }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert_eq!(state.phase(), SessionPhase::Loading);
}

#[test]
fn session_state_resolved_none_is_anonymous() {
    assert_eq!(SessionState::resolved(None).phase(), SessionPhase::Anonymous);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_persisted_session_goes_loading_then_anonymous() {
    let mut guard = SessionGuard::new(backend());
    assert_eq!(guard.state().phase(), SessionPhase::Loading);
    assert_eq!(guard.restore(), SessionPhase::Anonymous);
    assert!(!guard.state().loading);
}

#[tokio::test]
async fn restore_picks_up_backend_session() {
    let b = backend();
    b.login("alex@cci.edu").await.unwrap();
    let mut guard = SessionGuard::new(b);
    assert_eq!(guard.restore(), SessionPhase::Authenticated);
    assert_eq!(guard.user().map(|u| u.id.as_str()), Some("u2"));
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_sets_identity_with_submitted_email() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    assert!(guard.login("maria@cci.edu").await);
    assert_eq!(guard.user().map(|u| u.email.as_str()), Some("maria@cci.edu"));
    assert!(guard.state().is_authenticated());
}

#[tokio::test]
async fn login_unknown_email_fails_and_stays_anonymous() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    assert!(!guard.login("stranger@elsewhere.org").await);
    assert_eq!(guard.state().phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn failed_login_keeps_existing_identity() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    assert!(guard.login("alex@cci.edu").await);
    assert!(!guard.login("stranger@elsewhere.org").await);
    assert_eq!(guard.user().map(|u| u.id.as_str()), Some("u2"));
}

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_success_authenticates() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    assert!(guard.register(registration("Ольга", "olga@cci.edu")).await);
    let user = guard.user().unwrap();
    assert_eq!(user.email, "olga@cci.edu");
    assert_eq!(user.role, Role::Student);
}

#[tokio::test]
async fn register_duplicate_fails_and_leaves_state() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    let before = guard.state().clone();
    assert!(!guard.register(registration("Copy", "alex@cci.edu")).await);
    assert_eq!(guard.state(), &before);
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_clears_identity_when_signed_in() {
    let b = backend();
    let mut guard = SessionGuard::new(b.clone());
    guard.restore();
    guard.login("alex@cci.edu").await;
    guard.logout().await;
    assert!(guard.user().is_none());
    assert_eq!(guard.state().phase(), SessionPhase::Anonymous);
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn logout_from_any_state_ends_anonymous() {
    let mut loading = SessionGuard::new(backend());
    loading.logout().await;
    assert_eq!(loading.state().phase(), SessionPhase::Anonymous);

    let mut anonymous = SessionGuard::with_state(backend(), SessionState::resolved(None));
    anonymous.logout().await;
    assert_eq!(anonymous.into_state(), SessionState::resolved(None));
}

// =============================================================
// update_user
// =============================================================

#[tokio::test]
async fn update_user_is_idempotent() {
    let b = backend();
    let mut guard = SessionGuard::new(b.clone());
    guard.restore();
    guard.login("james@cci.edu").await;
    let mut edited = guard.user().unwrap().clone();
    edited.bio = Some("Люблю математику".to_owned());

    assert!(guard.update_user(edited.clone()).await);
    let once = (guard.state().clone(), b.current_user());
    assert!(guard.update_user(edited.clone()).await);
    let twice = (guard.state().clone(), b.current_user());

    assert_eq!(once, twice);
    assert_eq!(guard.user(), Some(&edited));
}

#[tokio::test]
async fn update_user_keeps_authenticated_phase() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    guard.login("alex@cci.edu").await;
    let mut edited = guard.user().unwrap().clone();
    edited.points += 50;
    assert!(guard.update_user(edited).await);
    assert_eq!(guard.state().phase(), SessionPhase::Authenticated);
    assert_eq!(guard.user().map(|u| u.points), Some(1300));
}

#[tokio::test]
async fn update_user_refused_while_anonymous() {
    let b = backend();
    let maria = b.users().into_iter().find(|u| u.id == "u3").unwrap();
    let mut guard = SessionGuard::new(b.clone());
    guard.restore();

    assert!(!guard.update_user(maria).await);
    assert_eq!(guard.state(), &SessionState::resolved(None));
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn update_user_refused_while_loading() {
    let b = backend();
    let maria = b.users().into_iter().find(|u| u.id == "u3").unwrap();
    let mut guard = SessionGuard::new(b);

    assert!(!guard.update_user(maria).await);
    assert_eq!(guard.state().phase(), SessionPhase::Loading);
}

#[tokio::test]
async fn update_user_refused_for_other_identity() {
    let b = backend();
    let mut guard = SessionGuard::new(b.clone());
    guard.restore();
    guard.login("alex@cci.edu").await;
    let before = guard.state().clone();
    let mut maria = b.users().into_iter().find(|u| u.id == "u3").unwrap();
    maria.points += 1;

    assert!(!guard.update_user(maria).await);
    assert_eq!(guard.state(), &before);
    assert_eq!(b.users().into_iter().find(|u| u.id == "u3").map(|u| u.points), Some(2100));
}

#[tokio::test]
async fn update_user_refused_on_duplicate_email() {
    let mut guard = SessionGuard::new(backend());
    guard.restore();
    guard.login("james@cci.edu").await;
    let before = guard.state().clone();
    let mut edited = guard.user().unwrap().clone();
    edited.email = "alex@cci.edu".to_owned();

    assert!(!guard.update_user(edited).await);
    assert_eq!(guard.state(), &before);
}

// =============================================================
// settle
// =============================================================

async fn signed_in_as(b: &MockBackend, email: &str) -> SessionState {
    let mut guard = SessionGuard::new(b.clone());
    guard.restore();
    guard.login(email).await;
    guard.into_state()
}

#[tokio::test]
async fn late_update_after_logout_stays_anonymous() {
    let b = backend();
    let start = signed_in_as(&b, "alex@cci.edu").await;
    let mut saving = SessionGuard::with_state(b.clone(), start.clone());
    let mut leaving = SessionGuard::with_state(b.clone(), start.clone());
    let mut edited = start.user.clone().unwrap();
    edited.bio = Some("Черновик".to_owned());

    leaving.logout().await;
    let published = settle(&start, &start, leaving.into_state());
    assert!(saving.update_user(edited).await);
    let published = settle(&published, &start, saving.into_state());

    assert_eq!(published.phase(), SessionPhase::Anonymous);
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn logout_finishing_after_update_stays_anonymous() {
    let b = backend();
    let start = signed_in_as(&b, "alex@cci.edu").await;
    let mut saving = SessionGuard::with_state(b.clone(), start.clone());
    let mut leaving = SessionGuard::with_state(b.clone(), start.clone());
    let mut edited = start.user.clone().unwrap();
    edited.points += 5;

    assert!(saving.update_user(edited).await);
    let published = settle(&start, &start, saving.into_state());
    leaving.logout().await;
    let published = settle(&published, &start, leaving.into_state());

    assert_eq!(published, SessionState::resolved(None));
    assert!(b.current_user().is_none());
}

#[tokio::test]
async fn failed_op_does_not_overwrite_newer_state() {
    let b = backend();
    let start = signed_in_as(&b, "alex@cci.edu").await;
    let mut saving = SessionGuard::with_state(b.clone(), start.clone());
    let mut relogin = SessionGuard::with_state(b.clone(), start.clone());
    let mut edited = start.user.clone().unwrap();
    edited.points += 5;

    assert!(saving.update_user(edited.clone()).await);
    let published = settle(&start, &start, saving.into_state());
    assert!(!relogin.login("stranger@elsewhere.org").await);
    let published = settle(&published, &start, relogin.into_state());

    assert_eq!(published.user, Some(edited));
}

#[test]
fn settle_without_interference_takes_outcome() {
    let start = SessionState::resolved(None);
    let outcome = SessionState::default();
    assert_eq!(settle(&start, &start, outcome.clone()), outcome);
}
