//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `query`, `toast`, `ui`) so individual
//! components can depend on small focused models. Each is provided once at
//! the app root as an `RwSignal` context.

pub mod auth;
pub mod query;
pub mod toast;
pub mod ui;
