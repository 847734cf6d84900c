//! Read-only modal listing every field of one application.
//!
//! Opens on the row's copy and swaps in the record fetched by id once it
//! arrives, so a transition made elsewhere shows up here too.

#[cfg(test)]
#[path = "application_details_test.rs"]
mod application_details_test;

use leptos::prelude::*;
use lending::application::Application;

use crate::components::status_badge::{FeeBadge, StatusBadge};
use crate::hooks::use_application;
use crate::util::format;

/// Label/value pairs in display order.
pub fn detail_rows(app: &Application) -> Vec<(&'static str, String)> {
    vec![
        ("Loan", app.loan_title.clone()),
        ("Category", app.category.clone()),
        ("Interest", format::percent(app.interest_rate)),
        ("Applicant", format!("{} <{}>", app.user_name, app.user_email)),
        ("Amount", format::money(app.amount)),
        ("Monthly income", format::money(app.monthly_income)),
        ("EMI plan", app.emi_plan.clone().unwrap_or_else(|| "-".to_owned())),
        ("Reason", app.reason.clone()),
        ("Contact", app.contact_number.clone()),
        ("National ID", app.national_id.clone()),
        ("Income source", app.income_source.clone()),
        ("Address", app.address.clone()),
        ("Notes", app.extra_notes.clone()),
        ("Applied", format::date(app.created_at.as_deref())),
        ("Approved", format::date(app.approved_at.as_deref())),
        ("Paid", format::date(app.paid_at.as_deref())),
    ]
}

#[component]
pub fn ApplicationDetails(application: Application, on_close: Callback<()>) -> impl IntoView {
    let fresh = use_application(application.id.clone());
    let snapshot = StoredValue::new(application);
    let current = move || fresh.with(|s| s.data.clone()).unwrap_or_else(|| snapshot.get_value());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Application details"</h2>
                {move || {
                    let app = current();
                    let transaction = app.payment_info.as_ref().map(|p| p.transaction_id.clone());
                    view! {
                        <p class="dialog__badges">
                            <StatusBadge status=app.status/>
                            <FeeBadge fee=app.fee_status/>
                        </p>
                        <dl class="details-grid">
                            {detail_rows(&app)
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                .collect_view()}
                            {transaction
                                .map(|id| view! { <dt>"Transaction"</dt><dd class="mono">{id}</dd> })}
                        </dl>
                    }
                }}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
