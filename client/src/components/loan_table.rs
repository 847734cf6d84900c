//! Loan management table for the manager and admin dashboards.
//!
//! Rows the viewer may not edit (another manager's loan) render without
//! actions. Admins additionally get the show-on-home toggle.

use leptos::prelude::*;
use lending::loan::{Loan, LoanForm, LoanPayload};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, ErrorPanel, Spinner};
use crate::components::loan_form::LoanFormView;
use crate::net::query::Mutation;
use crate::state::auth::AuthState;
use crate::state::query::QueryState;
use crate::util::format;
use crate::util::notify::Notifier;

#[component]
pub fn LoanTable(
    state: RwSignal<QueryState<Vec<Loan>>>,
    /// Offer the show-on-home checkbox per row.
    #[prop(default = false)]
    home_toggle: bool,
    /// Title/category/description filter.
    #[prop(optional, into)]
    search: Option<Signal<String>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();

    let editing = RwSignal::new(None::<Loan>);
    let deleting = RwSignal::new(None::<Loan>);
    let busy = RwSignal::new(false);

    let editable = move |loan: &Loan| {
        auth.with(|a| match (a.email(), a.role.role()) {
            (Some(email), Some(role)) => loan.can_edit(email, role),
            _ => false,
        })
    };

    let on_save = Callback::new(move |payload: LoanPayload| {
        let Some(loan) = editing.get_untracked() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_loan(&loan.id, &payload).await {
                Ok(()) => {
                    notifier.completed(Mutation::UpdateLoan, format!("Updated {}.", payload.title));
                    let _ = editing.try_set(None);
                }
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (loan, payload, notifier);
    });

    let on_delete = Callback::new(move |()| {
        let Some(loan) = deleting.get_untracked() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_loan(&loan.id).await {
                Ok(()) => notifier.completed(Mutation::DeleteLoan, format!("Deleted {}.", loan.title)),
                Err(e) => notifier.error(&e),
            }
            let _ = busy.try_set(false);
            let _ = deleting.try_set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = loan;
    });

    let toggle_home = move |loan: Loan, show: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let message = if show {
                format!("{} is now featured on the home page.", loan.title)
            } else {
                format!("{} was removed from the home page.", loan.title)
            };
            match crate::net::api::set_show_on_home(&loan.id, show).await {
                Ok(()) => notifier.completed(Mutation::ToggleShowOnHome, message),
                Err(e) => notifier.error(&e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (loan, show);
    };

    view! {
        {move || {
            let current = state.get();
            if current.is_initial_load() {
                return view! { <Spinner/> }.into_any();
            }
            if let Some(err) = current.blocking_error() {
                return view! { <ErrorPanel message=err.to_string()/> }.into_any();
            }
            let mut loans = current.data.unwrap_or_default();
            if loans.is_empty() {
                return view! { <EmptyState message="No loans yet."/> }.into_any();
            }
            if let Some(search) = search {
                let query = search.get();
                loans.retain(|loan| loan.matches_search(&query));
                if loans.is_empty() {
                    return view! { <EmptyState message="No loans match your search."/> }.into_any();
                }
            }
            view! {
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Loan"</th>
                            <th>"Interest"</th>
                            <th>"Limit"</th>
                            <th>"Created by"</th>
                            {home_toggle.then(|| view! { <th>"Home"</th> })}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {loans
                            .into_iter()
                            .map(|loan| {
                                let can_edit = editable(&loan);
                                let for_edit = loan.clone();
                                let for_delete = loan.clone();
                                let for_toggle = loan.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <strong>{loan.title.clone()}</strong>
                                            <small class="muted">{loan.category.clone()}</small>
                                        </td>
                                        <td>{format::percent(loan.interest_rate)}</td>
                                        <td>{format::money(loan.max_loan_limit)}</td>
                                        <td>{loan.created_by.clone()}</td>
                                        {home_toggle
                                            .then(|| {
                                                view! {
                                                    <td>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=loan.show_on_home
                                                            on:change=move |ev| {
                                                                toggle_home(for_toggle.clone(), event_target_checked(&ev));
                                                            }
                                                        />
                                                    </td>
                                                }
                                            })}
                                        <td class="table__actions">
                                            {can_edit
                                                .then(|| {
                                                    view! {
                                                        <button class="btn btn--small" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| deleting.set(Some(for_delete.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
                .into_any()
        }}
        {move || {
            editing
                .get()
                .map(|loan| {
                    view! {
                        <div class="dialog-backdrop">
                            <div class="dialog dialog--wide" role="dialog">
                                <h2>"Edit " {loan.title.clone()}</h2>
                                <LoanFormView
                                    initial=LoanForm::from_loan(&loan)
                                    submit_label="Save changes"
                                    busy=busy
                                    on_submit=on_save
                                    on_cancel=Callback::new(move |()| editing.set(None))
                                />
                            </div>
                        </div>
                    }
                })
        }}
        {move || {
            deleting
                .get()
                .map(|loan| {
                    view! {
                        <ConfirmDialog
                            title="Delete loan?"
                            message=format!("Delete {}? Borrowers will no longer see it.", loan.title)
                            confirm_label="Delete"
                            busy=busy
                            on_confirm=on_delete
                            on_cancel=Callback::new(move |()| deleting.set(None))
                        />
                    }
                })
        }}
    }
}
