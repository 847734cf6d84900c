//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (query hooks, mutations,
//! redirects) and delegates rendering details to `components`.

pub mod all_loans;
pub mod apply_loan;
pub mod dashboard;
pub mod home;
pub mod loan_details;
pub mod login;
pub mod not_found;
pub mod payment_success;
pub mod register;
