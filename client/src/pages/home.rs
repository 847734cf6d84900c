//! Landing page: hero, featured loans and how the process works.

use leptos::prelude::*;
use leptos_router::components::A;
use lending::loan;

use crate::components::feedback::{EmptyState, ErrorPanel, Spinner};
use crate::components::loan_card::LoanCard;
use crate::hooks::use_home_loans;

const STEPS: [(&str, &str); 4] = [
    ("Browse", "Compare loan products by rate, limit and EMI plan."),
    ("Apply", "Submit one short application for the loan you need."),
    ("Review", "A loan officer reviews and approves or rejects it."),
    ("Pay the fee", "Pay the application fee once approved and track everything in your dashboard."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let loans = use_home_loans();

    view! {
        <section class="hero">
            <h1>"Microloans, reviewed by people who know your business"</h1>
            <p>"Apply in minutes, track every step, and pay only when you are approved."</p>
            <div class="hero__actions">
                <A href="/all-loans" attr:class="btn btn--primary">"Explore Loans"</A>
                <A href="/register" attr:class="btn">"Create Account"</A>
            </div>
        </section>

        <section class="section">
            <h2>"Featured loans"</h2>
            {move || {
                let state = loans.get();
                if state.is_initial_load() {
                    return view! { <Spinner/> }.into_any();
                }
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                let featured: Vec<_> = state
                    .data
                    .as_deref()
                    .map(loan::home_loans)
                    .unwrap_or_default()
                    .into_iter()
                    .cloned()
                    .collect();
                if featured.is_empty() {
                    return view! { <EmptyState message="No featured loans right now."/> }.into_any();
                }
                view! {
                    <div class="loan-grid">
                        {featured.into_iter().map(|loan| view! { <LoanCard loan=loan/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>

        <section class="section how-it-works">
            <h2>"How it works"</h2>
            <ol class="steps">
                {STEPS
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <li class="steps__item">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
