//! Shared LoanLink domain model for the `client` and `server` crates.
//!
//! This crate owns the wire representation of users, loan products and loan
//! applications, plus the rules the front end enforces locally before it
//! talks to the backend: the route access gate, the application lifecycle
//! state machine, admin guardrails and form validation. It performs no I/O.

pub mod access;
pub mod admin;
pub mod application;
pub mod error;
pub mod loan;
pub mod payment;
pub mod user;
pub mod validate;

pub use access::{GuardDecision, Requirement, RoleResolution};
pub use application::{Application, ApplicationStatus, FeeStatus, Transition, TransitionError};
pub use error::ApiError;
pub use loan::Loan;
pub use user::{Identity, Role, User, UserStatus};
pub use validate::FieldErrors;
