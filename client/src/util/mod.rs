//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod return_path;
