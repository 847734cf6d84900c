//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. The session
//! provider fills `user`, the role resolver fills `role`, and every route
//! guard reads both through [`AuthState::guard`]. Sign-out clears it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use lending::access::{self, GuardDecision, Requirement, RoleResolution, SessionView};
use lending::user::{Identity, same_email};

/// Authentication state tracking the identity, its resolved role, and where
/// to return after sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// True until the first identity check finishes.
    pub loading: bool,
    pub role: RoleResolution,
    /// Last role lookup failure, shown while guards wait.
    pub role_error: Option<String>,
    /// Path a guard bounced to login from. Survives sign-out so a cold
    /// load can still honor it once the user signs in.
    pub return_to: Option<String>,
    /// Bumped to ask the role resolver for a fresh lookup.
    pub role_refresh: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            role: RoleResolution::Pending,
            role_error: None,
            return_to: None,
            role_refresh: 0,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    #[must_use]
    pub fn session(&self) -> SessionView {
        SessionView {
            loading: self.loading,
            authenticated: self.user.is_some(),
            role: self.role,
        }
    }

    /// Access decision for a guarded route at `path`.
    #[must_use]
    pub fn guard(&self, requirement: Requirement, path: &str) -> GuardDecision {
        access::evaluate(self.session(), requirement, path)
    }

    /// Whether the "Apply Now" action should be offered.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.user.is_some() && self.role.can_apply()
    }

    /// Record a signed-in identity. A different email drops the old role.
    pub fn signed_in(&mut self, identity: Identity) {
        let same_user = self.email().is_some_and(|email| same_email(email, &identity.email));
        if !same_user {
            self.role = RoleResolution::Pending;
            self.role_error = None;
        }
        self.user = Some(identity);
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.role = RoleResolution::Pending;
        self.role_error = None;
    }

    /// Ask for a fresh role lookup. The current resolution stays in place
    /// until the answer lands, so guards do not flash. Ignored while no role
    /// has resolved yet, since that lookup is already running.
    pub fn request_role_refresh(&mut self) {
        if self.user.is_some() && self.role.role().is_some() {
            self.role_refresh = self.role_refresh.wrapping_add(1);
        }
    }

    /// Store a role lookup result if it still belongs to the current user.
    /// Returns whether it was applied.
    pub fn resolve_role(&mut self, email: &str, resolution: RoleResolution) -> bool {
        if !self.email().is_some_and(|current| same_email(current, email)) {
            return false;
        }
        self.role = resolution;
        self.role_error = None;
        true
    }

    /// Record a failed lookup. The resolution is left as it was.
    pub fn role_failed(&mut self, email: &str, message: String) {
        if self.email().is_some_and(|current| same_email(current, email)) {
            self.role_error = Some(message);
        }
    }

    pub fn remember_return(&mut self, path: &str) {
        self.return_to = Some(path.to_owned());
    }

    /// Consume the remembered path, falling back to home when unsafe.
    pub fn take_return_path(&mut self) -> String {
        let raw = self.return_to.take();
        access::safe_return_path(raw.as_deref()).to_owned()
    }
}
