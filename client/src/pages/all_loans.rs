//! Public loan catalog with client-side search and category filter.

use leptos::prelude::*;
use lending::loan::{self, CATEGORIES};

use crate::components::feedback::{EmptyState, ErrorPanel, Spinner};
use crate::components::loan_card::LoanCard;
use crate::hooks::use_loans;

#[component]
pub fn AllLoansPage() -> impl IntoView {
    let loans = use_loans();
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    view! {
        <section class="section">
            <h1>"All loans"</h1>
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search by title, category or description"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="">"All categories"</option>
                    {CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                </select>
            </div>
            {move || {
                let state = loans.get();
                if state.is_initial_load() {
                    return view! { <Spinner/> }.into_any();
                }
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                let all = state.data.unwrap_or_default();
                let category = category.get();
                let selected = (!category.is_empty()).then_some(category.as_str());
                let shown: Vec<_> = loan::filter_catalog(&all, &search.get(), selected)
                    .into_iter()
                    .cloned()
                    .collect();
                if shown.is_empty() {
                    return view! { <EmptyState message="No loans match your search."/> }.into_any();
                }
                view! {
                    <div class="loan-grid">
                        {shown.into_iter().map(|loan| view! { <LoanCard loan=loan/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
