//! Route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in one of the four variants below.
//! They share `guarded`, which re-evaluates the access decision from
//! `AuthState` on every change and never caches it. Each route change also
//! asks the role resolver for a fresh `{role, status}`; the previous answer
//! keeps deciding until the new one lands. While the decision is
//! `Wait` a spinner renders; redirects use `replace` so the back button does
//! not bounce through a guarded URL.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use lending::access::{GuardDecision, Requirement};
use lending::user::Role;

use crate::net::query::{QueryCache, QueryFamily};
use crate::state::auth::AuthState;

/// Path plus query string as the user requested it.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

fn guarded(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = requested_path(&location.pathname.get(), &location.search.get());
        auth.with(|a| a.guard(requirement, &path))
    });

    Effect::new(move || {
        let decision = decision.get();
        if let GuardDecision::RedirectLogin { return_to } = &decision {
            auth.update(|a| a.remember_return(return_to));
            crate::util::return_path::store(return_to);
        }
        if let Some(target) = decision.target() {
            navigate(target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    // Role and status can change between navigations (an admin may suspend
    // or promote this user elsewhere), so every route change re-checks them.
    Effect::new(move || {
        location.pathname.track();
        auth.update(AuthState::request_role_refresh);
    });

    let role_error = move || auth.with(|a| a.role_error.clone());
    let on_retry = move |_| cache.update(|c| c.bump(QueryFamily::Users));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <Show when=move || decision.get() == GuardDecision::Wait>
                        <div class="guard-wait">
                            <span class="spinner" aria-label="Loading"></span>
                            <Show when=move || role_error().is_some()>
                                <p class="guard-wait__error">
                                    "We could not load your account: "
                                    {move || role_error().unwrap_or_default()}
                                </p>
                                <button class="btn" on:click=on_retry>"Retry now"</button>
                            </Show>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Any signed-in, active user.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Authenticated, children)
}

#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Role(Role::Admin), children)
}

#[component]
pub fn ManagerRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Role(Role::Manager), children)
}

#[component]
pub fn BorrowerRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Requirement::Role(Role::Borrower), children)
}
