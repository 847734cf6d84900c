//! Top navigation bar: brand, public links, theme toggle and session menu.

use leptos::prelude::*;
use leptos_router::components::A;
use lending::user::Role;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let signed_in = move || auth.with(|a| a.user.is_some());
    let display_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name().to_owned()).unwrap_or_default());
    let avatar = move || auth.with(|a| a.user.as_ref().and_then(|u| u.photo_url.clone()));
    let role_label = move || auth.with(|a| a.role.role().map(Role::label).unwrap_or_default());

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_menu = move |_| ui.update(|u| u.nav_open = !u.nav_open);
    let close_menus = move |_| ui.update(UiState::close_menus);

    let on_logout = move |_| {
        ui.update(UiState::close_menus);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::auth::end_session(auth).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"LoanLink"</A>
            <button class="navbar__burger" aria-label="Menu" on:click=on_toggle_menu>"☰"</button>
            <nav class="navbar__links" class:navbar__links--open=move || ui.with(|u| u.nav_open)>
                <A href="/" on:click=close_menus>"Home"</A>
                <A href="/all-loans" on:click=close_menus>"All Loans"</A>
                <Show when=signed_in>
                    <A href="/dashboard" on:click=close_menus>"Dashboard"</A>
                </Show>
            </nav>
            <div class="navbar__actions">
                <button class="btn btn--ghost" title="Toggle theme" on:click=on_toggle_theme>
                    {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                </button>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="btn">"Login"</A>
                            <A href="/register" attr:class="btn btn--primary">"Register"</A>
                        }
                    }
                >
                    <span class="navbar__user">
                        {move || {
                            avatar()
                                .map(|src| view! { <img class="avatar" src=src alt=""/> })
                        }}
                        <span class="navbar__user-name">{display_name}</span>
                        <span class="navbar__user-role">{role_label}</span>
                    </span>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </header>
    }
}
