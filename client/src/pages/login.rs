//! Login page supporting email/password and Google sign-in.
//!
//! Once a session exists the page sends the user back to the path a guard
//! remembered, or home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use lending::validate;

use crate::net::identity;
use crate::state::auth::AuthState;
use crate::util::nav::Redirect;
use crate::util::notify::Notifier;

/// Quick local check before calling the identity provider.
pub fn credentials_problem(email: &str, password: &str) -> Option<&'static str> {
    if !validate::is_email(email) {
        return Some("Enter a valid email address.");
    }
    if password.is_empty() {
        return Some("Enter your password.");
    }
    None
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();
    let redirect = Redirect::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let left = StoredValue::new(false);
    Effect::new(move || {
        let ready = auth.with(|a| !a.loading && a.user.is_some());
        if !ready || left.get_value() {
            return;
        }
        left.set_value(true);
        let target = auth.try_update_untracked(AuthState::take_return_path).unwrap_or_default();
        crate::util::return_path::clear();
        redirect.replace(target);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Some(problem) = credentials_problem(&email_value, &password_value) {
            info.set(problem.to_owned());
            return;
        }
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match identity::sign_in(&email_value, &password_value).await {
                Ok(identity) => {
                    crate::util::auth::establish_session(auth, identity).await;
                    notifier.success("Welcome back!");
                }
                Err(e) => {
                    notifier.error(&e);
                    let _ = busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, notifier);
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        identity::redirect_to_google();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to apply for and track your loans."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !info.get().is_empty()>
                        <p class="field-error">{move || info.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="auth-divider">"or"</div>
                <a href=identity::GOOGLE_SIGN_IN class="btn btn--google" on:click=on_google>
                    "Continue with Google"
                </a>
                <p class="auth-card__switch">
                    "New here? " <A href="/register">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
