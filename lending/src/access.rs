//! Route access gate.
//!
//! [`evaluate`] is the single authorization predicate every guarded route
//! runs on each render. Its checks run in a fixed order:
//!
//! 1. session still loading -> [`GuardDecision::Wait`]
//! 2. no session -> [`GuardDecision::RedirectLogin`] remembering the path
//! 3. role not resolved yet -> [`GuardDecision::Wait`]
//! 4. suspended account -> [`GuardDecision::RedirectHome`]
//! 5. wrong role -> [`GuardDecision::RedirectHome`]
//! 6. otherwise [`GuardDecision::Render`]
//!
//! A failed role lookup stays [`RoleResolution::Pending`]: it neither grants
//! nor denies access.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::user::{Role, RoleRecord, UserStatus};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/";

/// Role lookup state for the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleResolution {
    /// Not fetched yet, in flight, or the last attempt failed.
    #[default]
    Pending,
    Resolved { role: Role, status: UserStatus },
}

impl RoleResolution {
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Pending => None,
            Self::Resolved { role, .. } => Some(role),
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Resolved { status: UserStatus::Active, .. })
    }

    /// Whether the user may start a loan application.
    #[must_use]
    pub fn can_apply(self) -> bool {
        self == Self::Resolved { role: Role::Borrower, status: UserStatus::Active }
    }
}

impl From<RoleRecord> for RoleResolution {
    fn from(record: RoleRecord) -> Self {
        Self::Resolved { role: record.role, status: record.status }
    }
}

/// What a guarded route demands of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any signed-in, active user.
    Authenticated,
    /// A signed-in, active user holding exactly this role.
    Role(Role),
}

impl Requirement {
    #[must_use]
    pub fn admits(self, role: Role) -> bool {
        match self {
            Self::Authenticated => true,
            Self::Role(required) => required == role,
        }
    }
}

/// Outcome of a guard evaluation for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render nothing yet; do not navigate.
    Wait,
    RedirectLogin { return_to: String },
    RedirectHome,
    Render,
}

impl GuardDecision {
    /// Where to navigate, if anywhere.
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin { .. } => Some(LOGIN_PATH),
            Self::RedirectHome => Some(HOME_PATH),
            Self::Wait | Self::Render => None,
        }
    }
}

/// Snapshot of the session the gate needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub loading: bool,
    pub authenticated: bool,
    pub role: RoleResolution,
}

/// Decide what a guarded route renders for `requested_path`.
#[must_use]
pub fn evaluate(session: SessionView, requirement: Requirement, requested_path: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Wait;
    }
    if !session.authenticated {
        return GuardDecision::RedirectLogin { return_to: requested_path.to_owned() };
    }
    let RoleResolution::Resolved { role, status } = session.role else {
        return GuardDecision::Wait;
    };
    if status == UserStatus::Suspended {
        return GuardDecision::RedirectHome;
    }
    if !requirement.admits(role) {
        return GuardDecision::RedirectHome;
    }
    GuardDecision::Render
}

/// Where to go after signing in.
///
/// Only absolute in-app paths are honored; auth pages and anything that could
/// leave the site fall back to home.
#[must_use]
pub fn safe_return_path(raw: Option<&str>) -> &str {
    let Some(path) = raw.map(str::trim) else {
        return HOME_PATH;
    };
    let route = path.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return HOME_PATH;
    }
    if route == LOGIN_PATH || route == REGISTER_PATH {
        return HOME_PATH;
    }
    path
}

const LOOKUP_RETRY_BASE_MS: u32 = 1_000;
const LOOKUP_RETRY_MAX_MS: u32 = 8_000;

/// Backoff before retrying a failed identity or role lookup: 1s, 2s, 4s,
/// then 8s.
#[must_use]
pub fn lookup_retry_delay_ms(attempt: u32) -> u32 {
    LOOKUP_RETRY_BASE_MS
        .saturating_mul(1_u32 << attempt.min(3))
        .min(LOOKUP_RETRY_MAX_MS)
}
