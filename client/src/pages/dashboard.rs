//! Dashboard shell shared by every role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` is wrapped in `PrivateRoute`; each child route adds its own
//! role guard. The layout renders the role's sidebar from `dashboard_menu`
//! and the active child through `Outlet`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

pub mod add_loan;
pub mod admin_loans;
pub mod applications;
pub mod approved;
pub mod manage_loans;
pub mod manage_users;
pub mod my_loans;
pub mod pending;
pub mod profile;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;
use lending::user::Role;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::menu::{PROFILE, dashboard_menu};

/// Whether the sidebar entry `href` matches the current `pathname`. The bare
/// dashboard URL shows the profile.
pub fn menu_active(href: &str, pathname: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    pathname == href || (href == PROFILE.href && pathname == "/dashboard")
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let menu = move || auth.with(|a| a.role.role().map(dashboard_menu).unwrap_or_default());
    let role_label = move || auth.with(|a| a.role.role().map(Role::label).unwrap_or_default());
    let sidebar_class = move || {
        if ui.with(|u| u.sidebar_open) {
            "dashboard__sidebar dashboard__sidebar--open"
        } else {
            "dashboard__sidebar"
        }
    };

    view! {
        <div class="dashboard">
            <button
                class="dashboard__sidebar-toggle"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "Menu"
            </button>
            <aside class=sidebar_class>
                <p class="dashboard__role">{role_label}</p>
                <nav>
                    {move || {
                        menu()
                            .into_iter()
                            .map(|item| {
                                let class = move || {
                                    if menu_active(item.href, &location.pathname.get()) {
                                        "dashboard__link dashboard__link--active"
                                    } else {
                                        "dashboard__link"
                                    }
                                };
                                view! {
                                    <A href=item.href attr:class=class on:click=move |_| ui.update(UiState::close_menus)>
                                        {item.label}
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
            </aside>
            <main class="dashboard__content">
                <Outlet/>
            </main>
        </div>
    }
}
