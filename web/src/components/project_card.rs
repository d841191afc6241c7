//! Project card - funding progress for one placeholder project

use leptos::prelude::*;
use leptos_router::components::A;
use shared::data::ProjectSummary;
use shared::utils::{format_percentage, format_usd};
use shared::AppRoute;

fn progress_style(width: f64) -> String {
    format!("width: {:.2}%;", width)
}

#[component]
pub fn ProjectCard(project: ProjectSummary) -> impl IntoView {
    let percentage = format_percentage(project.funding_percentage());
    let style = progress_style(project.progress_width());
    let raised = format_usd(project.funding_current);
    let goal = format_usd(project.funding_goal);
    let days_left = project.days_left_label();

    view! {
        <A href=AppRoute::Campaigns.path() attr:class="card-link">
            <div class="card project-card">
                <div class="info">
                    <span class="category">{project.category}</span>
                    <h3 class="title">{project.title}</h3>
                    <p class="creator">"by " {project.creator}</p>
                    <p class="description">{project.description}</p>
                    <div class="funding">
                        <div class="progress-bar" title=percentage.clone()>
                            <div class="progress" style=style></div>
                        </div>
                        <div class="funding-text">
                            <span>{raised} " of " {goal}</span>
                            <span>{percentage}</span>
                            <span>{days_left}</span>
                        </div>
                    </div>
                </div>
            </div>
        </A>
    }
}
