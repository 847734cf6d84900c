//! Approved applications, with the manager's cancel-approved escape hatch.

use leptos::prelude::*;
use lending::application::ApplicationStatus;
use lending::user::Role;

use crate::components::application_list::ApplicationList;
use crate::hooks::use_applications;

#[component]
pub fn ApprovedApplicationsPage() -> impl IntoView {
    let applications = use_applications(|| Some(ApplicationStatus::Approved));

    view! {
        <section class="dashboard-page">
            <h1>"Approved applications"</h1>
            <ApplicationList
                state=applications
                role=Role::Manager
                empty_message="No approved applications yet."
            />
        </section>
    }
}
