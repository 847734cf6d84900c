//! Loan application form for borrowers.
//!
//! The loan snapshot is read-only; the applicant only fills in their own
//! details. The form is validated against the loan's limit and EMI plans
//! before anything is sent.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use lending::application::{Applicant, ApplicationForm};
use lending::loan::Loan;
use lending::validate::FieldErrors;

use crate::components::feedback::{ErrorPanel, Spinner};
use crate::components::field_error::FieldError;
use crate::hooks::use_loan;
use crate::state::auth::AuthState;
use crate::util::format;
use crate::util::nav::Redirect;
use crate::util::notify::Notifier;

#[component]
pub fn ApplyLoanPage() -> impl IntoView {
    let params = use_params_map();
    let loan = use_loan(move || params.with(|p| p.get("id")));

    view! {
        <section class="section apply">
            <h1>"Apply for a loan"</h1>
            {move || {
                let state = loan.get();
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                match state.data {
                    Some(loan) => view! { <ApplicationFormView loan=loan/> }.into_any(),
                    None => view! { <Spinner/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn ApplicationFormView(loan: Loan) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();
    let redirect = Redirect::new();

    let form = RwSignal::new(ApplicationForm {
        emi_plan: loan.emi_plans.first().cloned().unwrap_or_default(),
        ..ApplicationForm::default()
    });
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let loan = StoredValue::new(loan);

    let applicant = move || auth.with(applicant_of);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(applicant) = auth.with_untracked(applicant_of) else {
            return;
        };
        let submission = loan.with_value(|loan| form.with_untracked(|f| f.validate(loan, &applicant)));
        let application = match submission {
            Ok(application) => application,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_application(&application).await {
                Ok(()) => {
                    notifier.completed(
                        crate::net::query::Mutation::SubmitApplication,
                        "Application submitted. You can track it in My Loans.",
                    );
                    redirect.to("/dashboard/my-loans");
                }
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (application, redirect, notifier);
    };

    view! {
        <div class="apply__layout">
            <aside class="apply__snapshot">
                {loan.with_value(|loan| {
                    view! {
                        <h2>{loan.title.clone()}</h2>
                        <dl class="details-grid">
                            <dt>"Category"</dt>
                            <dd>{loan.category.clone()}</dd>
                            <dt>"Interest rate"</dt>
                            <dd>{format::percent(loan.interest_rate)}</dd>
                            <dt>"Maximum amount"</dt>
                            <dd>{format::money(loan.max_loan_limit)}</dd>
                        </dl>
                    }
                })}
                <dl class="details-grid">
                    <dt>"Applicant"</dt>
                    <dd>{move || applicant().map(|a| a.name).unwrap_or_default()}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || applicant().map(|a| a.email).unwrap_or_default()}</dd>
                </dl>
            </aside>
            <form class="apply__form" on:submit=on_submit>
                {text_field(form, errors, "Amount", "amount", |f| f.amount.clone(), |f, v| f.amount = v)}
                <label class="form-field">
                    <span>"EMI plan"</span>
                    <select
                        prop:value=move || form.with(|f| f.emi_plan.clone())
                        on:change=move |ev| form.update(|f| f.emi_plan = event_target_value(&ev))
                    >
                        {loan
                            .with_value(|loan| loan.emi_plans.clone())
                            .into_iter()
                            .map(|plan| view! { <option value=plan.clone()>{plan.clone()}</option> })
                            .collect_view()}
                    </select>
                    <FieldError errors=errors field="emi_plan"/>
                </label>
                {text_field(form, errors, "Monthly income", "monthly_income", |f| f.monthly_income.clone(), |f, v| f.monthly_income = v)}
                {text_field(form, errors, "Income source", "income_source", |f| f.income_source.clone(), |f, v| f.income_source = v)}
                {text_field(form, errors, "Contact number", "contact_number", |f| f.contact_number.clone(), |f, v| f.contact_number = v)}
                {text_field(form, errors, "National ID", "national_id", |f| f.national_id.clone(), |f, v| f.national_id = v)}
                {text_field(form, errors, "Address", "address", |f| f.address.clone(), |f, v| f.address = v)}
                <label class="form-field">
                    <span>"Reason for the loan"</span>
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="reason"/>
                </label>
                <label class="form-field">
                    <span>"Extra notes"</span>
                    <textarea
                        rows="2"
                        prop:value=move || form.with(|f| f.extra_notes.clone())
                        on:input=move |ev| form.update(|f| f.extra_notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Application" }}
                </button>
            </form>
        </div>
    }
}

fn applicant_of(auth: &AuthState) -> Option<Applicant> {
    auth.user
        .as_ref()
        .map(|u| Applicant { email: u.email.clone(), name: u.name().to_owned() })
}

fn text_field(
    form: RwSignal<ApplicationForm>,
    errors: RwSignal<FieldErrors>,
    label: &'static str,
    field: &'static str,
    get: fn(&ApplicationForm) -> String,
    set: fn(&mut ApplicationForm, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
            <FieldError errors=errors field=field/>
        </label>
    }
}
