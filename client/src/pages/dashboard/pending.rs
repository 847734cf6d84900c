//! Manager queue of applications awaiting a decision.

use leptos::prelude::*;
use lending::application::ApplicationStatus;
use lending::user::Role;

use crate::components::application_list::ApplicationList;
use crate::hooks::use_applications;

#[component]
pub fn PendingApplicationsPage() -> impl IntoView {
    let applications = use_applications(|| Some(ApplicationStatus::Pending));

    view! {
        <section class="dashboard-page">
            <h1>"Pending applications"</h1>
            <ApplicationList
                state=applications
                role=Role::Manager
                empty_message="No applications are waiting for review."
            />
        </section>
    }
}
