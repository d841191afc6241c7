//! User dashboard with placeholder profile and activity

use leptos::prelude::*;
use shared::data::dashboard::{DEMO_USER, QUICK_ACTIONS, RECENT_ACTIVITY};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = DEMO_USER;

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{format!("Welcome, {}", user.name)}</h1>
                <p>"This is your personal space to manage film projects and investments."</p>
            </header>

            <div class="main-grid">
                <section class="card profile-summary">
                    <h2 class="card-title">"Profile Summary"</h2>
                    <ul>
                        <li><strong>"Wallet Address: "</strong>{user.wallet_address}</li>
                        <li><strong>"Balance: "</strong>{user.balance}</li>
                        <li><strong>"Projects Backed: "</strong>{user.projects_backed}</li>
                        <li><strong>"Total Funds Contributed: "</strong>{user.funds_contributed}</li>
                    </ul>
                </section>

                <section class="card actions">
                    <h2 class="card-title">"Quick Actions"</h2>
                    <div class="action-buttons">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|label| view! { <button class="btn">{*label}</button> })
                            .collect_view()}
                    </div>
                </section>

                <section class="card recent-activity">
                    <h2 class="card-title">"Recent Activity"</h2>
                    <ul>
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|line| view! { <li>{*line}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
