//! Borrower's own applications.
//!
//! Pending applications can be cancelled; approved, unpaid ones offer the
//! fee checkout, which leaves the app for the processor's hosted page.

#[cfg(test)]
#[path = "my_loans_test.rs"]
mod my_loans_test;

use leptos::prelude::*;
use lending::application::Application;
use lending::payment::{self, CheckoutRequest};
use lending::user::Role;

use crate::components::application_list::ApplicationList;
use crate::hooks::use_my_applications;
use crate::util::notify::Notifier;

/// Checkout body for `app`, or `None` when the fee is not payable.
pub fn checkout_request(app: &Application) -> Option<CheckoutRequest> {
    app.pay_offered().then(|| CheckoutRequest {
        application_id: app.id.clone(),
        loan_title: app.loan_title.clone(),
        user_email: app.user_email.clone(),
    })
}

#[component]
pub fn MyLoansPage() -> impl IntoView {
    let applications = use_my_applications();
    let notifier = Notifier::from_context();
    let paying = RwSignal::new(false);

    let on_pay = Callback::new(move |app: Application| {
        if paying.get_untracked() {
            return;
        }
        let Some(request) = checkout_request(&app) else {
            notifier.refuse("This application has no fee to pay.");
            return;
        };
        paying.set(true);
        notifier.info("Redirecting to secure checkout...");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout_session(&request).await {
                Ok(session) => match (session.redirect_url(), web_sys::window()) {
                    (Some(url), Some(window)) => {
                        if let Err(e) = window.location().set_href(url) {
                            log::warn!("checkout redirect failed: {e:?}");
                            let _ = paying.try_set(false);
                        }
                        return;
                    }
                    _ => notifier.refuse("Checkout did not return a payment link. Please try again."),
                },
                Err(e) => notifier.error(&e),
            }
            let _ = paying.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    view! {
        <section class="dashboard-page">
            <h1>"My loans"</h1>
            <p class="muted">
                {format!(
                    "Approved applications need a {} application fee before disbursement.",
                    payment::fee_label(),
                )}
            </p>
            <ApplicationList
                state=applications
                role=Role::Borrower
                show_applicant=false
                empty_message="You have not applied for any loans yet."
                on_pay=on_pay
            />
        </section>
    }
}
