//! Session provider and role resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both are installed once by the root component. The session provider asks
//! the identity provider who is signed in and opens the matching backend
//! session; transport and server failures keep the session loading and are
//! retried, and only a definite "nobody" signs the browser out. The role
//! resolver looks up `{role, status}` whenever the signed-in email changes,
//! user records are invalidated, or a guard asks for a refresh on
//! navigation. Failed lookups are retried with a bounded backoff while the
//! same session is present.
//!
//! ORDERING
//! ========
//! A first social sign-in saves the borrower record before the backend
//! session opens, and the session opens before `AuthState` reports the user,
//! so the resolver never looks up a role the backend cannot answer yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use lending::ApiError;
use lending::user::Identity;

use crate::net::query::{QueryCache, QueryFamily};
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
use crate::net::{api, identity};
#[cfg(feature = "hydrate")]
use lending::user::NewUser;

/// What one identity check means for the session.
#[derive(Debug, PartialEq)]
pub enum IdentityCheck {
    SignedIn(Identity),
    SignedOut,
    /// Transient failure; stay loading and ask again.
    Retry,
}

impl IdentityCheck {
    pub fn classify(result: Result<Option<Identity>, ApiError>) -> Self {
        match result {
            Ok(Some(identity)) => Self::SignedIn(identity),
            Ok(None) => Self::SignedOut,
            Err(e) if e.is_retryable() => Self::Retry,
            Err(_) => Self::SignedOut,
        }
    }
}

/// Resolve the current identity once on startup.
pub fn install_session_provider(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use lending::access::lookup_retry_delay_ms;

        let mut attempt = 0_u32;
        loop {
            let result = identity::current_identity().await;
            if let Err(e) = &result {
                log::warn!("identity check failed (attempt {attempt}): {e}");
            }
            match IdentityCheck::classify(result) {
                IdentityCheck::SignedIn(identity) => return establish_session(auth, identity).await,
                IdentityCheck::SignedOut => break,
                IdentityCheck::Retry => {
                    // Still loading: guards wait instead of bouncing to login.
                    gloo_timers::future::TimeoutFuture::new(lookup_retry_delay_ms(attempt)).await;
                    if auth.try_with_untracked(|_| ()).is_none() {
                        return;
                    }
                    attempt = attempt.saturating_add(1);
                }
            }
        }
        let _ = auth.try_update(AuthState::signed_out);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Register the backend side of a sign-in, then publish it.
///
/// Backend failures here are logged only; the guards keep waiting on the
/// role and surface the problem there.
#[cfg(feature = "hydrate")]
pub async fn establish_session(auth: RwSignal<AuthState>, identity: Identity) {
    if identity.is_new_user {
        if let Err(e) = api::save_user(&NewUser::from_social(&identity)).await {
            log::warn!("saving social user {} failed: {e}", identity.email);
        }
    }
    if let Err(e) = api::open_session(&identity.email).await {
        log::warn!("backend session for {} failed: {e}", identity.email);
    }
    let _ = auth.try_update(|a| a.signed_in(identity));
}

/// Sign out of both the identity provider and the backend.
#[cfg(feature = "hydrate")]
pub async fn end_session(auth: RwSignal<AuthState>) {
    if let Err(e) = identity::sign_out().await {
        log::warn!("identity sign-out failed: {e}");
    }
    if let Err(e) = api::close_session().await {
        log::warn!("backend logout failed: {e}");
    }
    crate::util::return_path::clear();
    let _ = auth.try_update(|a| {
        a.signed_out();
        a.return_to = None;
    });
}

/// Look up the role whenever the signed-in email changes, user records are
/// invalidated, or a refresh is requested.
pub fn install_role_resolver(auth: RwSignal<AuthState>, cache: RwSignal<QueryCache>) {
    let email = Memo::new(move |_| auth.with(|a| a.email().map(str::to_owned)));
    let refresh = Memo::new(move |_| auth.with(|a| a.role_refresh));
    let generation = StoredValue::new(0_u64);

    Effect::new(move || {
        let _version = cache.with(|c| c.version(QueryFamily::Users));
        let _refresh = refresh.get();
        let email = email.get();
        // Any running retry loop belongs to an older email or version.
        generation.update_value(|g| *g = g.wrapping_add(1));
        let Some(email) = email else {
            return;
        };
        let ticket = generation.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(resolve_with_retry(auth, generation, ticket, email));
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, email);
    });
}

#[cfg(feature = "hydrate")]
async fn resolve_with_retry(auth: RwSignal<AuthState>, generation: StoredValue<u64>, ticket: u64, email: String) {
    use lending::access::lookup_retry_delay_ms;

    let current = move || generation.try_get_value() == Some(ticket);
    let mut attempt = 0_u32;
    while current() {
        match api::fetch_role(&email).await {
            Ok(record) => {
                if current() {
                    let _ = auth.try_update(|a| a.resolve_role(&email, record.into()));
                }
                return;
            }
            Err(err) => {
                log::warn!("role lookup for {email} failed (attempt {attempt}): {err}");
                if !current() {
                    return;
                }
                let _ = auth.try_update(|a| a.role_failed(&email, err.to_string()));
                if !err.is_retryable() {
                    return;
                }
                gloo_timers::future::TimeoutFuture::new(lookup_retry_delay_ms(attempt)).await;
                attempt = attempt.saturating_add(1);
            }
        }
    }
}
