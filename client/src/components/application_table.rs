//! Application list shared by the borrower, manager and admin dashboards.
//!
//! The buttons on each row come from `available_transitions` for the viewer's
//! role, so admins get a read-only table and nobody is offered an action the
//! lifecycle would reject.

use leptos::prelude::*;
use lending::application::{Application, Transition, available_transitions};
use lending::user::Role;

use crate::components::status_badge::{FeeBadge, StatusBadge};
use crate::util::format;

#[component]
pub fn ApplicationTable(
    #[prop(into)] applications: Signal<Vec<Application>>,
    role: Role,
    /// Show the applicant column (hidden on the borrower's own list).
    #[prop(default = true)]
    show_applicant: bool,
    on_action: Callback<(Application, Transition)>,
    on_view: Callback<Application>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Loan"</th>
                    {show_applicant.then(|| view! { <th>"Applicant"</th> })}
                    <th>"Amount"</th>
                    <th>"Applied"</th>
                    <th>"Status"</th>
                    <th>"Fee"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || applications.get()
                    key=|app| (app.id.clone(), app.status, app.fee_status)
                    children=move |app| {
                        let actions = available_transitions(&app, role);
                        let transaction = app.payment_info.as_ref().map(|p| p.transaction_id.clone());
                        let row_app = app.clone();
                        view! {
                            <tr>
                                <td>
                                    <strong>{app.loan_title.clone()}</strong>
                                    <small class="muted">{app.category.clone()}</small>
                                </td>
                                {show_applicant
                                    .then(|| {
                                        view! {
                                            <td>
                                                {app.user_name.clone()}
                                                <small class="muted">{app.user_email.clone()}</small>
                                            </td>
                                        }
                                    })}
                                <td>{format::money(app.amount)}</td>
                                <td>{format::date(app.created_at.as_deref())}</td>
                                <td><StatusBadge status=app.status/></td>
                                <td>
                                    <FeeBadge fee=app.fee_status/>
                                    {transaction.map(|id| view! { <small class="mono">{id}</small> })}
                                </td>
                                <td class="table__actions">
                                    <button
                                        class="btn btn--small"
                                        on:click={
                                            let app = row_app.clone();
                                            move |_| on_view.run(app.clone())
                                        }
                                    >
                                        "View"
                                    </button>
                                    {actions
                                        .into_iter()
                                        .map(|transition| {
                                            let app = row_app.clone();
                                            let class = match transition {
                                                Transition::Approve | Transition::Pay => "btn btn--small btn--primary",
                                                _ => "btn btn--small btn--danger",
                                            };
                                            view! {
                                                <button
                                                    class=class
                                                    on:click=move |_| on_action.run((app.clone(), transition))
                                                >
                                                    {transition.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
