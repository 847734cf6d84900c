//! Admin guardrails for changing another user's role and status.
//!
//! These checks run before any request is sent. The backend repeats them;
//! the client copy exists so forbidden actions are disabled up front.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;

use crate::user::{Role, SuspendReason, User, UserStatus, same_email};

/// Why an admin action is blocked.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("You cannot suspend your own account.")]
    SelfSuspension,
    #[error("Admin accounts cannot be suspended.")]
    AdminSuspension,
    #[error("Select a suspension reason.")]
    MissingReason,
    #[error("Explain the suspension in the feedback field.")]
    MissingFeedback,
    #[error("Nothing to update.")]
    NoChanges,
}

/// Whether `actor_email` may suspend `target`.
///
/// # Errors
///
/// Returns [`AdminError::SelfSuspension`] for the actor's own account and
/// [`AdminError::AdminSuspension`] for any admin.
pub fn can_suspend(actor_email: &str, target: &User) -> Result<(), AdminError> {
    if target.is(actor_email) {
        return Err(AdminError::SelfSuspension);
    }
    if target.role == Role::Admin {
        return Err(AdminError::AdminSuspension);
    }
    Ok(())
}

/// PATCH body for `/users/{email}/admin`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_reason: Option<SuspendReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_feedback: Option<String>,
}

impl UserUpdate {
    #[must_use]
    pub fn role(role: Role) -> Self {
        Self { role: Some(role), ..Self::default() }
    }

    #[must_use]
    pub fn activate() -> Self {
        Self { status: Some(UserStatus::Active), ..Self::default() }
    }

    #[must_use]
    pub fn suspend(reason: Option<SuspendReason>, feedback: &str) -> Self {
        Self {
            status: Some(UserStatus::Suspended),
            suspend_reason: reason,
            suspend_feedback: Some(feedback.trim().to_owned()),
            ..Self::default()
        }
    }

    /// Combined role + status edit. Suspension details are only kept when the
    /// new status is `suspended`.
    #[must_use]
    pub fn combined(role: Role, status: UserStatus, reason: Option<SuspendReason>, feedback: &str) -> Self {
        let suspending = status == UserStatus::Suspended;
        Self {
            role: Some(role),
            status: Some(status),
            suspend_reason: if suspending { reason } else { None },
            suspend_feedback: suspending.then(|| feedback.trim().to_owned()),
        }
    }

    /// Whether sending this update moves `target` into suspension, which
    /// requires the reason/feedback step.
    #[must_use]
    pub fn enters_suspension(&self, target: &User) -> bool {
        self.status == Some(UserStatus::Suspended) && !target.is_suspended()
    }

    /// Drop no-op fields and enforce the guardrails.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoChanges`] when nothing would change,
    /// [`AdminError::AdminSuspension`] when the result would be a suspended
    /// admin, a [`can_suspend`] error when entering suspension is forbidden, and
    /// [`AdminError::MissingReason`] / [`AdminError::MissingFeedback`] when
    /// the suspension details are incomplete.
    pub fn validate(mut self, actor_email: &str, target: &User) -> Result<Self, AdminError> {
        if self.role == Some(target.role) {
            self.role = None;
        }
        let entering = self.enters_suspension(target);
        if self.status == Some(target.status) {
            self.status = None;
        }
        if self.role.is_none() && self.status.is_none() {
            return Err(AdminError::NoChanges);
        }
        // Admins are never suspended, whichever field moves them there.
        let role_after = self.role.unwrap_or(target.role);
        let status_after = self.status.unwrap_or(target.status);
        if role_after == Role::Admin && status_after == UserStatus::Suspended {
            return Err(AdminError::AdminSuspension);
        }

        if entering {
            can_suspend(actor_email, target)?;
            if self.suspend_reason.is_none() {
                return Err(AdminError::MissingReason);
            }
            if self.suspend_feedback.as_deref().map_or(true, |f| f.trim().is_empty()) {
                return Err(AdminError::MissingFeedback);
            }
        } else {
            self.suspend_reason = None;
            self.suspend_feedback = None;
        }
        Ok(self)
    }
}

/// Users matching an optional role filter and a name/email search.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], role: Option<Role>, search: &str) -> Vec<&'a User> {
    let search = search.trim().to_lowercase();
    users
        .iter()
        .filter(|u| role.map_or(true, |r| u.role == r))
        .filter(|u| {
            search.is_empty()
                || u.email.to_lowercase().contains(&search)
                || u.name.to_lowercase().contains(&search)
        })
        .collect()
}
