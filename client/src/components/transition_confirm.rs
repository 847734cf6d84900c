//! Confirm-then-send flow for application lifecycle actions.
//!
//! A page sets `pending` to the row and action the user clicked; this
//! component asks for confirmation, re-checks the action against the
//! lifecycle rules, sends the single backend call and invalidates the
//! application lists. Payment goes through checkout instead and never lands
//! here.

#[cfg(test)]
#[path = "transition_confirm_test.rs"]
mod transition_confirm_test;

use leptos::prelude::*;
use lending::application::{Application, Transition};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::auth::AuthState;
use crate::util::notify::Notifier;

/// Dialog title and body for confirming `transition` on `app`.
pub fn confirm_copy(transition: Transition, app: &Application) -> (String, String) {
    let subject = format!("{}'s application for {}", app.user_name, app.loan_title);
    match transition {
        Transition::Approve => ("Approve application?".to_owned(), format!("Approve {subject}?")),
        Transition::Reject => (
            "Reject application?".to_owned(),
            format!("Reject {subject}? This cannot be undone."),
        ),
        Transition::Cancel => (
            "Cancel application?".to_owned(),
            format!("Cancel your application for {}? This cannot be undone.", app.loan_title),
        ),
        Transition::CancelApproved => (
            "Cancel approved application?".to_owned(),
            format!("Cancel {subject}? A paid fee is not refunded automatically."),
        ),
        Transition::Pay => ("Pay application fee?".to_owned(), format!("Pay the fee for {}?", app.loan_title)),
    }
}

/// Toast shown once the backend accepts `transition`.
pub fn done_message(transition: Transition) -> &'static str {
    match transition {
        Transition::Approve => "Application approved.",
        Transition::Reject => "Application rejected.",
        Transition::Cancel | Transition::CancelApproved => "Application cancelled.",
        Transition::Pay => "Payment recorded.",
    }
}

/// Capitalize the first letter of a lowercase error message.
pub fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str().trim_end_matches('.')),
        None => String::new(),
    }
}

#[component]
pub fn TransitionConfirm(pending: RwSignal<Option<(Application, Transition)>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();
    let busy = RwSignal::new(false);

    let on_cancel = Callback::new(move |()| pending.set(None));
    let on_confirm = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some((app, transition)) = pending.get_untracked() else {
            return;
        };
        let Some(role) = auth.with_untracked(|a| a.role.role()) else {
            return;
        };
        if let Err(e) = transition.authorize(role, &app) {
            notifier.refuse(sentence(&e.to_string()));
            pending.set(None);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_transition(&app.id, transition).await {
                Ok(()) => notifier.completed(
                    crate::net::query::Mutation::Transition(transition),
                    done_message(transition),
                ),
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
            let _ = pending.try_set(None);
        });
    });

    view! {
        {move || {
            pending
                .get()
                .map(|(app, transition)| {
                    let (title, message) = confirm_copy(transition, &app);
                    view! {
                        <ConfirmDialog
                            title=title
                            message=message
                            confirm_label=transition.label()
                            busy=busy
                            on_confirm=on_confirm
                            on_cancel=on_cancel
                        />
                    }
                })
        }}
    }
}
