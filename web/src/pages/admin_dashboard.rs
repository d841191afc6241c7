//! Admin dashboard

use leptos::prelude::*;
use shared::data::dashboard::{PLATFORM_STATS, VERIFICATION_QUEUE};
use shared::utils::format_number;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="admin-dashboard">
            <h1>"Admin Dashboard"</h1>
            <section class="stats-section">
                <h2>"Platform Stats"</h2>
                <ul>
                    {PLATFORM_STATS
                        .rows()
                        .into_iter()
                        .map(|(label, value)| {
                            view! { <li>{format!("{}: {}", label, format_number(value as f64, 0))}</li> }
                        })
                        .collect_view()}
                </ul>
            </section>
            <section class="management-section">
                <h2>"User / Project / Pool Management"</h2>
                <p>"Manage users, projects, and pools here. (Coming soon)"</p>
            </section>
            <section class="verification-section">
                <h2>"Verification Queue"</h2>
                <ul>
                    {VERIFICATION_QUEUE
                        .iter()
                        .map(|item| view! { <li>{*item}</li> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
