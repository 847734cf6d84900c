//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, dialogs and route guards while reading and
//! writing shared state from Leptos context providers.

pub mod application_details;
pub mod application_list;
pub mod application_table;
pub mod confirm_dialog;
pub mod feedback;
pub mod field_error;
pub mod footer;
pub mod guard;
pub mod loan_card;
pub mod loan_form;
pub mod loan_table;
pub mod navbar;
pub mod status_badge;
pub mod suspend_dialog;
pub mod toast_host;
pub mod transition_confirm;
