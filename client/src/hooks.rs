//! Query hooks: cached reads bound to the component that created them.
//!
//! ARCHITECTURE
//! ============
//! [`use_query`] owns one `RwSignal<QueryState<T>>`. An effect tracks the
//! key closure and the version of the key's `QueryFamily`; whenever either
//! changes it fetches again. Responses that arrive after a newer fetch
//! started, or after the owning page unmounted, are dropped.

use std::future::Future;

use leptos::prelude::*;
use lending::ApiError;
use lending::application::{Application, ApplicationStatus};
use lending::loan::Loan;
use lending::user::{Role, User};

use crate::net::api;
use crate::net::query::{QueryCache, QueryKey};
use crate::state::auth::AuthState;
use crate::state::query::QueryState;

/// Generic cached read. `key` returning `None` means "not ready to fetch".
pub fn use_query<T, Fut>(
    key: impl Fn() -> Option<QueryKey> + 'static,
    fetch: impl Fn(QueryKey) -> Fut + 'static,
) -> RwSignal<QueryState<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = expect_context::<RwSignal<QueryCache>>();
    let state = RwSignal::new(QueryState::<T>::default());
    let seq = StoredValue::new(0_u64);

    Effect::new(move || {
        let Some(key) = key() else {
            return;
        };
        let _version = cache.with(|c| c.version(key.family()));
        seq.update_value(|s| *s = s.wrapping_add(1));
        let ticket = seq.get_value();
        state.update(QueryState::start);

        let request = fetch(key);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = request.await;
            if seq.try_get_value() != Some(ticket) {
                return;
            }
            let _ = state.try_update(|s| s.finish(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, ticket);
    });

    state
}

fn unexpected(key: &QueryKey) -> ApiError {
    ApiError::Decode(format!("unexpected query key {key:?}"))
}

fn current_email() -> Memo<Option<String>> {
    let auth = expect_context::<RwSignal<AuthState>>();
    Memo::new(move |_| auth.with(|a| a.email().map(str::to_owned)))
}

async fn fetch_loans(key: QueryKey) -> Result<Vec<Loan>, ApiError> {
    match key {
        QueryKey::HomeLoans => api::fetch_home_loans().await,
        QueryKey::ManagerLoans(email) => api::fetch_manager_loans(&email).await,
        _ => api::fetch_loans().await,
    }
}

async fn fetch_applications(key: QueryKey) -> Result<Vec<Application>, ApiError> {
    match key {
        QueryKey::Applications(status) => api::fetch_applications(status).await,
        QueryKey::MyApplications(email) => api::fetch_my_applications(&email).await,
        _ => api::fetch_applications(None).await,
    }
}

pub fn use_loans() -> RwSignal<QueryState<Vec<Loan>>> {
    use_query(|| Some(QueryKey::Loans), fetch_loans)
}

pub fn use_home_loans() -> RwSignal<QueryState<Vec<Loan>>> {
    use_query(|| Some(QueryKey::HomeLoans), fetch_loans)
}

pub fn use_loan(id: impl Fn() -> Option<String> + 'static) -> RwSignal<QueryState<Loan>> {
    use_query(
        move || id().map(QueryKey::Loan),
        |key| async move {
            match key {
                QueryKey::Loan(id) => api::fetch_loan(&id).await,
                other => Err(unexpected(&other)),
            }
        },
    )
}

/// Loans published by the signed-in manager.
pub fn use_manager_loans() -> RwSignal<QueryState<Vec<Loan>>> {
    let email = current_email();
    use_query(move || email.get().map(QueryKey::ManagerLoans), fetch_loans)
}

pub fn use_applications(
    status: impl Fn() -> Option<ApplicationStatus> + 'static,
) -> RwSignal<QueryState<Vec<Application>>> {
    use_query(move || Some(QueryKey::Applications(status())), fetch_applications)
}

/// Authoritative copy of one application, refetched after any transition.
pub fn use_application(id: String) -> RwSignal<QueryState<Application>> {
    use_query(
        move || Some(QueryKey::Application(id.clone())),
        |key| async move {
            match key {
                QueryKey::Application(id) => api::fetch_application(&id).await,
                other => Err(unexpected(&other)),
            }
        },
    )
}

/// Applications submitted by the signed-in borrower.
pub fn use_my_applications() -> RwSignal<QueryState<Vec<Application>>> {
    let email = current_email();
    use_query(move || email.get().map(QueryKey::MyApplications), fetch_applications)
}

pub fn use_users(role: impl Fn() -> Option<Role> + 'static) -> RwSignal<QueryState<Vec<User>>> {
    use_query(
        move || Some(QueryKey::Users(role())),
        |key| async move {
            match key {
                QueryKey::Users(role) => api::fetch_users(role).await,
                other => Err(unexpected(&other)),
            }
        },
    )
}

/// Backend record of the signed-in user.
pub fn use_current_user() -> RwSignal<QueryState<User>> {
    let email = current_email();
    use_query(
        move || email.get().map(QueryKey::User),
        |key| async move {
            match key {
                QueryKey::User(email) => api::fetch_user(&email).await,
                other => Err(unexpected(&other)),
            }
        },
    )
}
