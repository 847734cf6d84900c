//! Every loan in the catalog, with home-page visibility control.

use leptos::prelude::*;

use crate::components::loan_table::LoanTable;
use crate::hooks::use_loans;

#[component]
pub fn AdminLoansPage() -> impl IntoView {
    let loans = use_loans();

    view! {
        <section class="dashboard-page">
            <h1>"All loans"</h1>
            <p class="muted">"Checked loans are featured on the home page."</p>
            <LoanTable state=loans home_toggle=true/>
        </section>
    }
}
