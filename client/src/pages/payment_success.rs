//! Landing page for the hosted checkout redirect.
//!
//! The processor sends the borrower back with `success`, `applicationId` and
//! `session_id` in the query string. The fee is confirmed once, then the
//! markers are removed from the URL so a refresh cannot confirm again.

#[cfg(test)]
#[path = "payment_success_test.rs"]
mod payment_success_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use lending::payment::{self, PaymentOutcome};

use crate::components::feedback::Spinner;
use crate::util::nav::Redirect;
use crate::util::notify::Notifier;

pub const PAGE_PATH: &str = "/payment-success";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Visited without checkout markers.
    Idle,
    Confirming,
    Confirmed,
    Failed(String),
}

/// Phase to enter when the page first sees the return URL.
pub fn initial_phase(outcome: &PaymentOutcome) -> Phase {
    match outcome {
        PaymentOutcome::NoMarkers => Phase::Idle,
        PaymentOutcome::Succeeded(_) => Phase::Confirming,
        PaymentOutcome::Failed { .. } => {
            Phase::Failed("The payment was not completed. No fee was charged.".to_owned())
        }
    }
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let notifier = Notifier::from_context();
    let redirect = Redirect::new();

    let phase = RwSignal::new(Phase::Idle);
    let started = StoredValue::new(false);

    Effect::new(move || {
        let outcome = query.with(|q| PaymentOutcome::from_query(|key| q.get(key)));
        // Clearing the markers changes the query again; only the first read counts.
        if started.get_value() {
            return;
        }
        started.set_value(true);
        phase.set(initial_phase(&outcome));

        match outcome {
            PaymentOutcome::Succeeded(ret) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::net::query::Mutation;
                    use lending::application::Transition;

                    match crate::net::api::confirm_payment(&ret.application_id, &ret.confirmation()).await {
                        Ok(()) => {
                            let _ = phase.try_set(Phase::Confirmed);
                            notifier.completed(Mutation::Transition(Transition::Pay), "Application fee paid.");
                        }
                        Err(e) => {
                            log::warn!("payment confirmation for {} failed: {e}", ret.application_id);
                            let _ = phase.try_set(Phase::Failed(e.to_string()));
                            notifier.error(&e);
                        }
                    }
                    redirect.replace(PAGE_PATH);
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (ret, notifier);
            }
            PaymentOutcome::Failed { .. } => redirect.replace(PAGE_PATH),
            PaymentOutcome::NoMarkers => {}
        }
    });

    view! {
        <section class="section payment-result">
            {move || match phase.get() {
                Phase::Confirming => view! {
                    <div class="payment-result__card">
                        <Spinner/>
                        <p>"Confirming your payment..."</p>
                    </div>
                }
                .into_any(),
                Phase::Confirmed => view! {
                    <div class="payment-result__card payment-result__card--ok">
                        <h1>"Payment successful"</h1>
                        <p>{format!("Your {} application fee has been recorded.", payment::fee_label())}</p>
                        <A href="/dashboard/my-loans">"Back to My Loans"</A>
                    </div>
                }
                .into_any(),
                Phase::Failed(message) => view! {
                    <div class="payment-result__card payment-result__card--error">
                        <h1>"Payment not confirmed"</h1>
                        <p>{message}</p>
                        <A href="/dashboard/my-loans">"Back to My Loans"</A>
                    </div>
                }
                .into_any(),
                Phase::Idle => view! {
                    <div class="payment-result__card">
                        <h1>"Nothing to confirm"</h1>
                        <p>"Fees are paid from the My Loans dashboard once an application is approved."</p>
                        <A href="/dashboard/my-loans">"Go to My Loans"</A>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
