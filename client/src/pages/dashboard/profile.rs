//! Profile page: who the user is, their role and account status, and the
//! owner-editable name and photo.

use leptos::prelude::*;
use lending::user::{ProfileUpdate, User};
use lending::validate::FieldErrors;

use crate::components::feedback::{ErrorPanel, Spinner};
use crate::components::field_error::FieldError;
use crate::components::status_badge::AccountBadge;
use crate::hooks::use_current_user;
use crate::state::auth::AuthState;
use crate::util::format;
use crate::util::notify::Notifier;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let record = use_current_user();

    view! {
        <section class="dashboard-page">
            <h1>"My profile"</h1>
            {move || {
                let state = record.get();
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                match state.data {
                    Some(user) => view! { <ProfileCard user=user/> }.into_any(),
                    None => view! { <Spinner/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();

    let name = RwSignal::new(user.name.clone());
    let photo = RwSignal::new(user.photo_url.clone().unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let email = user.email.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = match ProfileUpdate::from_form(&name.get_untracked(), &photo.get_untracked()) {
            Ok(update) => update,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let email = email.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&email, &update).await {
                Ok(()) => {
                    let _ = auth.try_update(|a| {
                        if let Some(identity) = a.user.as_mut() {
                            identity.display_name = Some(update.name.clone());
                            identity.photo_url.clone_from(&update.photo_url);
                        }
                    });
                    notifier.completed(crate::net::query::Mutation::UpdateProfile, "Profile updated.");
                }
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email, update, auth, notifier);
    };

    let suspension = user.suspension();

    view! {
        <div class="profile">
            <div class="profile__summary">
                {move || {
                    let src = photo.get();
                    (!src.is_empty()).then(|| view! { <img class="avatar avatar--large" src=src alt="Profile photo"/> })
                }}
                <h2>{move || name.get()}</h2>
                <p class="muted">{user.email.clone()}</p>
                <dl class="details-grid">
                    <dt>"Role"</dt>
                    <dd>{user.role.label()}</dd>
                    <dt>"Status"</dt>
                    <dd><AccountBadge status=user.status/></dd>
                    <dt>"Member since"</dt>
                    <dd>{format::date(user.created_at.as_deref())}</dd>
                </dl>
                {suspension
                    .map(|s| {
                        view! {
                            <div class="notice notice--error">
                                <strong>{s.reason.label()}</strong>
                                <p>{s.feedback}</p>
                            </div>
                        }
                    })}
            </div>
            <form class="profile__form" on:submit=on_submit>
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="form-field">
                    <span>"Photo URL"</span>
                    <input
                        type="url"
                        prop:value=move || photo.get()
                        on:input=move |ev| photo.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="photo_url"/>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </div>
    }
}
