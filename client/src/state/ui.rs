//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and query state so
//! layout controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
    pub sidebar_open: bool,
}

impl UiState {
    /// Close every overlay menu, e.g. after navigating.
    pub fn close_menus(&mut self) {
        self.nav_open = false;
        self.sidebar_open = false;
    }
}
