//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, notice_banner::NoticeBanner};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::Protected;

/// Root application component.
///
/// Restores the persisted session before the router renders anything, so a
/// reload on `/dashboard` is admitted without a detour through the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::restore()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="Habit Tracker"/>

        <Router>
            <Navbar/>
            <NoticeBanner/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Protected><ProfilePage/></Protected> }
                    />
                </Routes>
            </main>
            <footer class="app-footer">"© 2025 Habit Tracker App"</footer>
        </Router>
    }
}
