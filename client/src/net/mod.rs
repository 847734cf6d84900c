//! Networking modules for the lending backend and identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles backend REST calls, `identity` talks to the identity
//! provider, and `query` tracks which cached reads are stale.

pub mod api;
pub mod identity;
pub mod query;
