//! Loan applications and their lifecycle.
//!
//! STATE MACHINE
//! =============
//! `status` starts at `pending` and moves exactly once:
//!
//! ```text
//! pending --approve--> approved --cancel-approved--> cancelled
//!    |  \--reject----> rejected
//!    \----cancel-----> cancelled
//! ```
//!
//! `fee_status` starts `unpaid` and becomes `paid` only while `approved`.
//! Cancelling an approved application leaves a paid fee untouched.
//!
//! The backend is the authority for every transition. The client uses
//! [`Transition::check`] and [`available_transitions`] to decide which actions
//! to offer and to reject obviously illegal requests before sending them.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loan::Loan;
use crate::user::Role;
use crate::validate::{self, FieldErrors};

/// Review status of an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Approved, Self::Rejected, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application fee status, orthogonal to [`ApplicationStatus`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    #[default]
    Unpaid,
    Paid,
}

impl FeeStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
        }
    }
}

/// Receipt recorded by the payment confirmation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(default)]
    pub provider: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    pub transaction_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// A borrower's application against a loan product.
///
/// Loan fields are a snapshot taken at submission time; later loan edits do
/// not change them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    pub loan_id: String,
    #[serde(default)]
    pub loan_title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub interest_rate: f64,
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    pub amount: f64,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub income_source: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub extra_notes: String,
    #[serde(default)]
    pub emi_plan: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub fee_status: FeeStatus,
    #[serde(default)]
    pub payment_info: Option<PaymentInfo>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Application {
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.fee_status == FeeStatus::Paid
    }

    /// Whether the borrower should be offered the pay action.
    #[must_use]
    pub fn pay_offered(&self) -> bool {
        Transition::Pay.check(self).is_ok()
    }
}

/// A status or fee transition requested by one actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Approve,
    Reject,
    Cancel,
    CancelApproved,
    Pay,
}

/// Why a transition is not legal for an application in its current state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {transition} an application that is {actual}")]
    InvalidStatus {
        transition: Transition,
        actual: ApplicationStatus,
    },
    #[error("the application fee is already paid")]
    AlreadyPaid,
    #[error("only a {required} can {transition} an application")]
    WrongActor { transition: Transition, required: Role },
}

impl Transition {
    pub const ALL: [Self; 5] = [
        Self::Approve,
        Self::Reject,
        Self::Cancel,
        Self::CancelApproved,
        Self::Pay,
    ];

    /// The only role allowed to request this transition.
    #[must_use]
    pub fn actor(self) -> Role {
        match self {
            Self::Approve | Self::Reject | Self::CancelApproved => Role::Manager,
            Self::Cancel | Self::Pay => Role::Borrower,
        }
    }

    /// Status the application must be in.
    #[must_use]
    pub fn required_status(self) -> ApplicationStatus {
        match self {
            Self::Approve | Self::Reject | Self::Cancel => ApplicationStatus::Pending,
            Self::CancelApproved | Self::Pay => ApplicationStatus::Approved,
        }
    }

    /// Backend sub-path under `/loan-applications/{id}/`.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Cancel => "cancel",
            Self::CancelApproved => "cancel-approved",
            Self::Pay => "pay-confirmation",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::Cancel => "Cancel",
            Self::CancelApproved => "Cancel Approval",
            Self::Pay => "Pay Fee",
        }
    }

    /// Whether the state allows this transition, ignoring who asks.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidStatus`] when the status is wrong and
    /// [`TransitionError::AlreadyPaid`] when paying a paid fee.
    pub fn check(self, app: &Application) -> Result<(), TransitionError> {
        if app.status != self.required_status() {
            return Err(TransitionError::InvalidStatus { transition: self, actual: app.status });
        }
        if self == Self::Pay && app.is_paid() {
            return Err(TransitionError::AlreadyPaid);
        }
        Ok(())
    }

    /// [`Transition::check`] plus the actor rule.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::WrongActor`] when `role` may not request the
    /// transition, otherwise whatever [`Transition::check`] reports.
    pub fn authorize(self, role: Role, app: &Application) -> Result<(), TransitionError> {
        if role != self.actor() {
            return Err(TransitionError::WrongActor { transition: self, required: self.actor() });
        }
        self.check(app)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// Transitions `role` may request on `app` right now, in display order.
///
/// Admins review applications read-only and never get actions.
#[must_use]
pub fn available_transitions(app: &Application, role: Role) -> Vec<Transition> {
    Transition::ALL
        .into_iter()
        .filter(|t| t.authorize(role, app).is_ok())
        .collect()
}

/// Who is applying, taken from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applicant {
    pub email: String,
    pub name: String,
}

/// Raw application form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub amount: String,
    pub monthly_income: String,
    pub reason: String,
    pub contact_number: String,
    pub national_id: String,
    pub income_source: String,
    pub address: String,
    pub extra_notes: String,
    pub emi_plan: String,
}

/// Submission body: snapshot of the loan plus the applicant's answers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub loan_id: String,
    pub loan_title: String,
    pub category: String,
    pub interest_rate: f64,
    pub user_email: String,
    pub user_name: String,
    pub amount: f64,
    pub monthly_income: f64,
    pub reason: String,
    pub contact_number: String,
    pub national_id: String,
    pub income_source: String,
    pub address: String,
    pub extra_notes: String,
    pub emi_plan: Option<String>,
    pub status: ApplicationStatus,
    pub fee_status: FeeStatus,
}

impl ApplicationForm {
    /// Validate against the loan being applied for.
    ///
    /// The amount bound is `0 < amount <= loan.max_loan_limit`. A failing form
    /// must never reach the network.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any field is invalid.
    pub fn validate(&self, loan: &Loan, applicant: &Applicant) -> Result<NewApplication, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = match validate::parse_number(&self.amount) {
            Some(amount) if loan.allows_amount(amount) => amount,
            Some(amount) if amount <= 0.0 => {
                errors.insert("amount", "Amount must be greater than zero.");
                amount
            }
            Some(amount) => {
                errors.insert(
                    "amount",
                    format!("Amount cannot exceed the loan limit of {}.", loan.max_loan_limit),
                );
                amount
            }
            None => {
                errors.insert("amount", "Enter the amount you need.");
                0.0
            }
        };
        let monthly_income = match validate::parse_number(&self.monthly_income) {
            Some(income) if income >= 0.0 => income,
            Some(_) => {
                errors.insert("monthly_income", "Monthly income cannot be negative.");
                0.0
            }
            None => {
                errors.insert("monthly_income", "Enter your monthly income.");
                0.0
            }
        };
        let reason = validate::required(&mut errors, "reason", &self.reason, "Tell us why you need the loan.");
        let contact_number =
            validate::required(&mut errors, "contact_number", &self.contact_number, "Enter a contact number.");

        let emi_plan = self.emi_plan.trim();
        let emi_plan = if loan.emi_plans.is_empty() {
            (!emi_plan.is_empty()).then(|| emi_plan.to_owned())
        } else if loan.emi_plans.iter().any(|p| p == emi_plan) {
            Some(emi_plan.to_owned())
        } else {
            errors.insert("emi_plan", "Choose one of the offered EMI plans.");
            None
        };

        errors.into_result(NewApplication {
            loan_id: loan.id.clone(),
            loan_title: loan.title.clone(),
            category: loan.category.clone(),
            interest_rate: loan.interest_rate,
            user_email: applicant.email.clone(),
            user_name: applicant.name.clone(),
            amount,
            monthly_income,
            reason,
            contact_number,
            national_id: self.national_id.trim().to_owned(),
            income_source: self.income_source.trim().to_owned(),
            address: self.address.trim().to_owned(),
            extra_notes: self.extra_notes.trim().to_owned(),
            emi_plan,
            status: ApplicationStatus::Pending,
            fee_status: FeeStatus::Unpaid,
        })
    }
}
