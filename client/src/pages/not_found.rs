//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
