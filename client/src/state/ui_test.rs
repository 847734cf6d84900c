use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_with_menus_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
    assert!(!state.sidebar_open);
}

#[test]
fn close_menus_keeps_theme() {
    let mut state = UiState { dark_mode: true, nav_open: true, sidebar_open: true };
    state.close_menus();
    assert!(state.dark_mode);
    assert!(!state.nav_open);
    assert!(!state.sidebar_open);
}
