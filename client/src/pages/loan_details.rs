//! Public loan details page with the borrower's "Apply Now" entry point.

#[cfg(test)]
#[path = "loan_details_test.rs"]
mod loan_details_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use lending::access::RoleResolution;
use lending::user::{Role, UserStatus};

use crate::components::feedback::{ErrorPanel, Spinner};
use crate::hooks::use_loan;
use crate::state::auth::AuthState;
use crate::util::format;

/// What the apply area offers the current visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOffer {
    Apply,
    SignIn,
    /// Session present, role still resolving.
    Checking,
    Suspended,
    /// Managers and admins cannot apply.
    NotBorrower(Role),
}

impl ApplyOffer {
    pub fn for_session(auth: &AuthState) -> Self {
        if auth.user.is_none() {
            return if auth.loading { Self::Checking } else { Self::SignIn };
        }
        match auth.role {
            RoleResolution::Pending => Self::Checking,
            RoleResolution::Resolved { status: UserStatus::Suspended, .. } => Self::Suspended,
            RoleResolution::Resolved { role: Role::Borrower, .. } => Self::Apply,
            RoleResolution::Resolved { role, .. } => Self::NotBorrower(role),
        }
    }
}

#[component]
pub fn LoanDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id"));
    let loan = use_loan(id);
    let offer = Memo::new(move |_| auth.with(ApplyOffer::for_session));

    view! {
        <section class="section loan-details">
            {move || {
                let state = loan.get();
                if state.is_initial_load() {
                    return view! { <Spinner/> }.into_any();
                }
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                let Some(loan) = state.data else {
                    return view! { <Spinner/> }.into_any();
                };
                let apply_href = format!("/apply/{}", loan.id);
                view! {
                    <div class="loan-details__layout">
                        <div class="loan-details__gallery">
                            {loan
                                .images
                                .iter()
                                .map(|src| view! { <img src=src.clone() alt=loan.title.clone()/> })
                                .collect_view()}
                        </div>
                        <div class="loan-details__info">
                            <span class="loan-card__category">{loan.category.clone()}</span>
                            <h1>{loan.title.clone()}</h1>
                            <p>{loan.description.clone()}</p>
                            <dl class="details-grid">
                                <dt>"Interest rate"</dt>
                                <dd>{format::percent(loan.interest_rate)}</dd>
                                <dt>"Maximum amount"</dt>
                                <dd>{format::money(loan.max_loan_limit)}</dd>
                                <dt>"EMI plans"</dt>
                                <dd>{loan.emi_plans.join(", ")}</dd>
                                <dt>"Required documents"</dt>
                                <dd>
                                    {if loan.required_documents.is_empty() {
                                        "None".to_owned()
                                    } else {
                                        loan.required_documents.join(", ")
                                    }}
                                </dd>
                            </dl>
                            {move || match offer.get() {
                                ApplyOffer::Apply => {
                                    view! { <A href=apply_href.clone() attr:class="btn btn--primary">"Apply Now"</A> }
                                        .into_any()
                                }
                                ApplyOffer::SignIn => {
                                    view! {
                                        <A href="/login" attr:class="btn btn--primary">"Login to apply"</A>
                                    }
                                        .into_any()
                                }
                                ApplyOffer::Checking => view! { <Spinner/> }.into_any(),
                                ApplyOffer::Suspended => {
                                    view! {
                                        <p class="note">"Your account is suspended, so you cannot apply."</p>
                                    }
                                        .into_any()
                                }
                                ApplyOffer::NotBorrower(role) => {
                                    view! {
                                        <button class="btn" disabled>"Apply Now"</button>
                                        <p class="note">
                                            {format!("Signed in as {}. Only borrowers can apply.", role.label())}
                                        </p>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
