//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;
use shared::data::featured_projects;
use shared::AppRoute;

use crate::components::ProjectCard;
use crate::utils::constants::FEATURED_COUNT;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = featured_projects(FEATURED_COUNT)
        .into_iter()
        .map(|project| view! { <ProjectCard project=project/> })
        .collect_view();

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Welcome to Crowdfunding Platform for Creatives"</h1>
                <p class="subtitle">
                    "A platform where people in the creative and entertainment industry raise funds for their projects."
                </p>
                <div class="cta-buttons">
                    <A href=AppRoute::PoolCreate.path() attr:class="cta-primary cta-large">
                        "Create a Campaign"
                    </A>
                </div>
                <div class="cta-buttons">
                    <A href=AppRoute::Campaigns.path() attr:class="cta-secondary">
                        "Explore Campaigns"
                    </A>
                </div>
            </section>

            <section class="overview">
                <h2>"What is CineX?"</h2>
                <p>
                    "CineX connects creatives and entertainment professionals with supporters, using blockchain "
                    "technology for a transparent, community-driven crowdfunding ecosystem."
                </p>
            </section>

            <section class="featured">
                <h2>"Featured Campaigns"</h2>
                <div class="project-grid">{featured}</div>
            </section>
        </div>
    }
}
