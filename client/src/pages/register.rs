//! Account registration.
//!
//! The identity provider creates the account first; the backend user record
//! is saved with the chosen role before the session is published so the role
//! lookup that follows always finds it.

use leptos::prelude::*;
use leptos_router::components::A;
use lending::user::{RegisterForm, Role};
use lending::validate::FieldErrors;

use crate::components::field_error::FieldError;
use crate::state::auth::AuthState;
use crate::util::nav::Redirect;
use crate::util::notify::Notifier;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();
    let redirect = Redirect::new();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let left = StoredValue::new(false);
    Effect::new(move || {
        let ready = auth.with(|a| !a.loading && a.user.is_some());
        if ready && !left.get_value() {
            left.set_value(true);
            redirect.replace("/");
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.with_untracked(RegisterForm::validate) {
            Ok(registration) => registration,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::{api, identity};

            let user = registration.user;
            let signed_up = identity::sign_up(
                &user.email,
                &registration.password,
                &user.name,
                user.photo_url.as_deref(),
            )
            .await;
            let mut identity = match signed_up {
                Ok(identity) => identity,
                Err(e) => {
                    notifier.error(&e);
                    let _ = busy.try_set(false);
                    return;
                }
            };
            if let Err(e) = api::save_user(&user).await {
                notifier.error(&e);
                let _ = busy.try_set(false);
                return;
            }
            // The record above already carries the chosen role.
            identity.is_new_user = false;
            crate::util::auth::establish_session(auth, identity).await;
            notifier.success("Account created. Welcome to LoanLink!");
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, notifier);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name"/>
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email"/>
                    </label>
                    <label class="form-field">
                        <span>"Photo URL"</span>
                        <input
                            type="url"
                            placeholder="https://"
                            prop:value=move || form.with(|f| f.photo_url.clone())
                            on:input=move |ev| form.update(|f| f.photo_url = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="photo_url"/>
                    </label>
                    <label class="form-field">
                        <span>"I want to"</span>
                        <select
                            prop:value=move || form.with(|f| f.role.as_str().to_owned())
                            on:change=move |ev| {
                                let role = Role::parse(&event_target_value(&ev)).unwrap_or_default();
                                form.update(|f| f.role = role);
                            }
                        >
                            {Role::SELF_SERVICE
                                .iter()
                                .map(|role| {
                                    let label = match role {
                                        Role::Manager => "Offer loans (manager)",
                                        _ => "Borrow (borrower)",
                                    };
                                    view! { <option value=role.as_str()>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                        <FieldError errors=errors field="role"/>
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="password"/>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
