//! Campaign listing - every placeholder project

use leptos::prelude::*;
use shared::data::placeholder_projects;

use crate::components::ProjectCard;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    view! {
        <div class="campaigns">
            <h1>"Campaigns"</h1>
            <div class="project-grid">
                {placeholder_projects()
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect_view()}
            </div>
        </div>
    }
}
