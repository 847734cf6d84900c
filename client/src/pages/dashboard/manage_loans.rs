//! Loans published by the signed-in manager.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loan_table::LoanTable;
use crate::hooks::use_manager_loans;

#[component]
pub fn ManageLoansPage() -> impl IntoView {
    let loans = use_manager_loans();
    let search = RwSignal::new(String::new());

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Manage loans"</h1>
                <input
                    type="search"
                    placeholder="Search your loans"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <A href="/dashboard/add-loan" attr:class="btn btn--primary">"Add loan"</A>
            </header>
            <LoanTable state=loans search=search/>
        </section>
    }
}
