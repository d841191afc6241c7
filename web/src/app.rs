//! CineX Web App - Leptos Frontend
//!
//! Router plus the header/footer shell around every page.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use shared::AppRoute;

use crate::components::{Footer, Header};
use crate::pages::{
    AdminDashboardPage, CampaignsPage, DashboardPage, HomePage, PlaceholderPage, ProjectsPage,
    WaitlistPage,
};
use crate::state::shell::provide_shell_context;

#[component]
pub fn App() -> impl IntoView {
    let shell = provide_shell_context();

    view! {
        <Router>
            <div class="app-container" class:dark-mode=move || shell.dark_mode()>
                <Header/>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/projects") view=ProjectsPage/>
                        <Route path=path!("/waitlist") view=WaitlistPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/campaigns") view=CampaignsPage/>
                        <Route path=path!("/admin-dashboard") view=AdminDashboardPage/>
                        <Route
                            path=path!("/pool-dashboard")
                            view=|| view! { <PlaceholderPage route=AppRoute::PoolDashboard/> }
                        />
                        <Route
                            path=path!("/pool-detail")
                            view=|| view! { <PlaceholderPage route=AppRoute::PoolDetail/> }
                        />
                        <Route
                            path=path!("/pool-create")
                            view=|| view! { <PlaceholderPage route=AppRoute::PoolCreate/> }
                        />
                        <Route
                            path=path!("/rewards")
                            view=|| view! { <PlaceholderPage route=AppRoute::Rewards/> }
                        />
                        <Route
                            path=path!("/coep-pools")
                            view=|| view! { <PlaceholderPage route=AppRoute::CoepPools/> }
                        />
                        <Route
                            path=path!("/escrow-management")
                            view=|| view! { <PlaceholderPage route=AppRoute::EscrowManagement/> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=AppRoute::Home.path()>
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
