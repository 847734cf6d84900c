//! New loan product form for managers.

use leptos::prelude::*;
use lending::loan::{LoanForm, LoanPayload};

use crate::components::loan_form::LoanFormView;
use crate::state::auth::AuthState;
use crate::util::nav::Redirect;
use crate::util::notify::Notifier;

#[component]
pub fn AddLoanPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();
    let redirect = Redirect::new();
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |mut payload: LoanPayload| {
        if busy.get_untracked() {
            return;
        }
        payload.created_by = auth.with_untracked(|a| a.email().map(str::to_owned));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_loan(&payload).await {
                Ok(()) => {
                    notifier.completed(
                        crate::net::query::Mutation::CreateLoan,
                        format!("{} is now open for applications.", payload.title),
                    );
                    redirect.to("/dashboard/manage-loans");
                }
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, notifier, redirect);
    });

    view! {
        <section class="dashboard-page">
            <h1>"Add a loan"</h1>
            <LoanFormView initial=LoanForm::default() submit_label="Add Loan" busy=busy on_submit=on_submit/>
        </section>
    }
}
