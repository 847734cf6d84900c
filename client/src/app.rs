//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guard::{AdminRoute, BorrowerRoute, ManagerRoute, PrivateRoute};
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::net::query::QueryCache;
use crate::pages::all_loans::AllLoansPage;
use crate::pages::apply_loan::ApplyLoanPage;
use crate::pages::dashboard::{
    DashboardLayout, add_loan::AddLoanPage, admin_loans::AdminLoansPage, applications::LoanApplicationsPage,
    approved::ApprovedApplicationsPage, manage_loans::ManageLoansPage, manage_users::ManageUsersPage,
    my_loans::MyLoansPage, pending::PendingApplicationsPage, profile::ProfilePage,
};
use crate::pages::home::HomePage;
use crate::pages::loan_details::LoanDetailsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::payment_success::PaymentSuccessPage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::auth::{install_role_resolver, install_session_provider};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, query cache, toast and UI contexts, starts the
/// session provider and role resolver, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        return_to: crate::util::return_path::load(),
        ..AuthState::default()
    });
    let cache = RwSignal::new(QueryCache::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(cache);
    provide_context(toasts);
    provide_context(ui);

    install_session_provider(auth);
    install_role_resolver(auth, cache);

    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/loanlink.css"/>
        <Title text="LoanLink"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("all-loans") view=AllLoansPage/>
                    <Route path=(StaticSegment("loans"), ParamSegment("id")) view=LoanDetailsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("apply"), ParamSegment("id"))
                        view=|| view! { <BorrowerRoute><ApplyLoanPage/></BorrowerRoute> }
                    />
                    <Route
                        path=StaticSegment("payment-success")
                        view=|| view! { <BorrowerRoute><PaymentSuccessPage/></BorrowerRoute> }
                    />
                    <ParentRoute
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardLayout/></PrivateRoute> }
                    >
                        <Route path=StaticSegment("") view=ProfilePage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route
                            path=StaticSegment("my-loans")
                            view=|| view! { <BorrowerRoute><MyLoansPage/></BorrowerRoute> }
                        />
                        <Route
                            path=StaticSegment("add-loan")
                            view=|| view! { <ManagerRoute><AddLoanPage/></ManagerRoute> }
                        />
                        <Route
                            path=StaticSegment("manage-loans")
                            view=|| view! { <ManagerRoute><ManageLoansPage/></ManagerRoute> }
                        />
                        <Route
                            path=StaticSegment("pending-applications")
                            view=|| view! { <ManagerRoute><PendingApplicationsPage/></ManagerRoute> }
                        />
                        <Route
                            path=StaticSegment("approved-applications")
                            view=|| view! { <ManagerRoute><ApprovedApplicationsPage/></ManagerRoute> }
                        />
                        <Route
                            path=StaticSegment("manage-users")
                            view=|| view! { <AdminRoute><ManageUsersPage/></AdminRoute> }
                        />
                        <Route
                            path=StaticSegment("all-loans")
                            view=|| view! { <AdminRoute><AdminLoansPage/></AdminRoute> }
                        />
                        <Route
                            path=StaticSegment("loan-applications")
                            view=|| view! { <AdminRoute><LoanApplicationsPage/></AdminRoute> }
                        />
                    </ParentRoute>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
