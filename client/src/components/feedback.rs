//! Loading, error and empty placeholders for query-backed views.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <span class="spinner" aria-label="Loading"></span>
        </div>
    }
}

#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="empty-state">{message}</p> }
}
