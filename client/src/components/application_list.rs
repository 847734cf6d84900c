//! Query-backed application list with confirmation and detail modals.
//!
//! Every dashboard page that lists applications renders this. Lifecycle
//! actions go through [`TransitionConfirm`]; `Pay` is handed to `on_pay`
//! because it leaves the app for checkout.

use leptos::prelude::*;
use lending::application::{Application, Transition};
use lending::user::Role;

use crate::components::application_details::ApplicationDetails;
use crate::components::application_table::ApplicationTable;
use crate::components::feedback::{EmptyState, ErrorPanel, Spinner};
use crate::components::transition_confirm::TransitionConfirm;
use crate::state::query::QueryState;

#[component]
pub fn ApplicationList(
    state: RwSignal<QueryState<Vec<Application>>>,
    role: Role,
    #[prop(into)] empty_message: String,
    #[prop(default = true)] show_applicant: bool,
    #[prop(optional)] on_pay: Option<Callback<Application>>,
) -> impl IntoView {
    let pending = RwSignal::new(None::<(Application, Transition)>);
    let viewing = RwSignal::new(None::<Application>);

    let on_action = Callback::new(move |(app, transition): (Application, Transition)| {
        if transition == Transition::Pay {
            if let Some(on_pay) = on_pay {
                on_pay.run(app);
            }
        } else {
            pending.set(Some((app, transition)));
        }
    });
    let on_view = Callback::new(move |app: Application| viewing.set(Some(app)));
    let on_close = Callback::new(move |()| viewing.set(None));
    let rows = Signal::derive(move || state.with(|s| s.data.clone().unwrap_or_default()));

    view! {
        {move || {
            state.with(|s| {
                if s.is_initial_load() {
                    return view! { <Spinner/> }.into_any();
                }
                if let Some(err) = s.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                if s.data.as_ref().is_none_or(Vec::is_empty) {
                    return view! { <EmptyState message=empty_message.clone()/> }.into_any();
                }
                view! {
                    <ApplicationTable
                        applications=rows
                        role=role
                        show_applicant=show_applicant
                        on_action=on_action
                        on_view=on_view
                    />
                }
                    .into_any()
            })
        }}
        <TransitionConfirm pending=pending/>
        {move || {
            viewing.get().map(|app| view! { <ApplicationDetails application=app on_close=on_close/> })
        }}
    }
}
