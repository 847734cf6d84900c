//! Admin overview of every application, filterable by status. Read-only.

use leptos::prelude::*;
use lending::application::ApplicationStatus;
use lending::user::Role;

use crate::components::application_list::ApplicationList;
use crate::hooks::use_applications;

#[component]
pub fn LoanApplicationsPage() -> impl IntoView {
    let status = RwSignal::new(None::<ApplicationStatus>);
    let applications = use_applications(move || status.get());

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Loan applications"</h1>
                <select on:change=move |ev| status.set(ApplicationStatus::parse(&event_target_value(&ev)))>
                    <option value="">"All statuses"</option>
                    {ApplicationStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            <ApplicationList
                state=applications
                role=Role::Admin
                empty_message="No applications match this filter."
            />
        </section>
    }
}
