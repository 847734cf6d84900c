use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <strong>"LoanLink"</strong>
                <p>"Microloans for small businesses and everyday needs, reviewed by real people."</p>
            </div>
            <nav class="footer__links">
                <A href="/">"Home"</A>
                <A href="/all-loans">"All Loans"</A>
                <A href="/dashboard">"Dashboard"</A>
            </nav>
        </footer>
    }
}
