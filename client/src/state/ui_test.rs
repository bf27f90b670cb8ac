use super::*;

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(!state.notifications_open);
}

#[test]
fn sidebar_open_and_close() {
    let mut state = UiState::default();
    state.open_sidebar();
    assert!(state.sidebar_open);
    state.close_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn toggle_notifications_flips() {
    let mut state = UiState::default();
    state.toggle_notifications();
    assert!(state.notifications_open);
    state.toggle_notifications();
    assert!(!state.notifications_open);
}

#[test]
fn on_navigate_closes_drawer_and_dropdown() {
    let mut state = UiState { sidebar_open: true, notifications_open: true };
    state.on_navigate();
    assert_eq!(state, UiState::default());
}
