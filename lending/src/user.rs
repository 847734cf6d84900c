//! User identity and authorization records.
//!
//! `Identity` is what the identity provider knows about a signed-in person;
//! `User` is the backend's authorization record for the same email, carrying
//! the role and account status the access gate consults.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

/// Authorization role. Adding a variant is a compile-time-visible change for
/// every guard and menu that matches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Borrower,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Borrower, Self::Manager, Self::Admin];

    /// Roles a visitor may choose for themselves on the registration form.
    pub const SELF_SERVICE: [Self; 2] = [Self::Borrower, Self::Manager];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Borrower => "borrower",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Borrower => "Borrower",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Suspension blocks every guarded route regardless of role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl UserStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Suspended];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Enumerated reasons an admin can select when suspending an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuspendReason {
    PolicyViolation,
    FraudulentActivity,
    IncompleteDocuments,
    PaymentDefault,
    Other,
}

impl SuspendReason {
    pub const ALL: [Self; 5] = [
        Self::PolicyViolation,
        Self::FraudulentActivity,
        Self::IncompleteDocuments,
        Self::PaymentDefault,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PolicyViolation => "policy-violation",
            Self::FraudulentActivity => "fraudulent-activity",
            Self::IncompleteDocuments => "incomplete-documents",
            Self::PaymentDefault => "payment-default",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PolicyViolation => "Policy violation",
            Self::FraudulentActivity => "Fraudulent activity",
            Self::IncompleteDocuments => "Incomplete documents",
            Self::PaymentDefault => "Payment default",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == raw.trim())
    }
}

/// Reason and admin feedback attached to a suspended account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suspension {
    pub reason: SuspendReason,
    pub feedback: String,
}

/// A signed-in person as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    /// Set by the provider on the first social sign-in for this email.
    #[serde(default)]
    pub is_new_user: bool,
}

impl Identity {
    /// Display name, falling back to the local part of the email.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Backend authorization record for a user, keyed by email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend_reason: Option<SuspendReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend_feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.status == UserStatus::Suspended
    }

    /// Suspension details, only reported while the account is suspended.
    #[must_use]
    pub fn suspension(&self) -> Option<Suspension> {
        if !self.is_suspended() {
            return None;
        }
        Some(Suspension {
            reason: self.suspend_reason.unwrap_or(SuspendReason::Other),
            feedback: self.suspend_feedback.clone().unwrap_or_default(),
        })
    }

    /// Whether `email` refers to this user (case-insensitive).
    #[must_use]
    pub fn is(&self, email: &str) -> bool {
        same_email(&self.email, email)
    }
}

/// Compare two emails the way the backend keys users: trimmed, case-insensitive.
#[must_use]
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// The `{role, status}` lookup returned by the role resolver endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
}

/// Body for creating the backend user record after sign-up.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub role: Role,
    pub status: UserStatus,
}

impl NewUser {
    /// Record for a first social sign-in, which always starts as a borrower.
    #[must_use]
    pub fn from_social(identity: &Identity) -> Self {
        Self {
            email: identity.email.trim().to_owned(),
            name: identity.name().to_owned(),
            photo_url: identity.photo_url.clone(),
            role: Role::Borrower,
            status: UserStatus::Active,
        }
    }
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub photo_url: String,
    pub password: String,
    pub role: Role,
}

/// A validated registration: credentials for the identity provider plus the
/// backend user record.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub password: String,
    pub user: NewUser,
}

pub const MIN_PASSWORD_LEN: usize = 6;

impl RegisterForm {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any field is invalid. Admin is never
    /// a self-service role.
    pub fn validate(&self) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = validate::required(&mut errors, "name", &self.name, "Enter your name.");
        let email = self.email.trim().to_owned();
        if !validate::is_email(&email) {
            errors.insert("email", "Enter a valid email address.");
        }
        let photo = self.photo_url.trim();
        if !photo.is_empty() && !validate::is_http_url(photo) {
            errors.insert("photo_url", "Photo URL must start with http:// or https://.");
        }
        if let Some(message) = password_problem(&self.password) {
            errors.insert("password", message);
        }
        if !Role::SELF_SERVICE.contains(&self.role) {
            errors.insert("role", "Choose borrower or manager.");
        }
        errors.into_result(Registration {
            password: self.password.clone(),
            user: NewUser {
                email,
                name,
                photo_url: (!photo.is_empty()).then(|| photo.to_owned()),
                role: self.role,
                status: UserStatus::Active,
            },
        })
    }
}

/// First password rule the candidate breaks, if any.
#[must_use]
pub fn password_problem(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 6 characters.");
    }
    if !password.chars().any(char::is_uppercase) {
        return Some("Password must contain an uppercase letter.");
    }
    if !password.chars().any(char::is_lowercase) {
        return Some("Password must contain a lowercase letter.");
    }
    None
}

/// Owner-editable profile fields. Role and status are never part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl ProfileUpdate {
    /// Build a profile update from raw form text.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for a blank name or malformed photo URL.
    pub fn from_form(name: &str, photo_url: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = validate::required(&mut errors, "name", name, "Enter your name.");
        let photo = photo_url.trim();
        if !photo.is_empty() && !validate::is_http_url(photo) {
            errors.insert("photo_url", "Photo URL must start with http:// or https://.");
        }
        errors.into_result(Self {
            name,
            photo_url: (!photo.is_empty()).then(|| photo.to_owned()),
        })
    }
}
