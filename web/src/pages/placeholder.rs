//! Layout-only pages that have no content yet

use leptos::prelude::*;
use leptos_router::components::A;
use shared::AppRoute;

#[component]
pub fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="placeholder-page card">
            <h1>{route.title()}</h1>
            <p>"This section is coming soon."</p>
            <A href=AppRoute::Home.path()>
                <span class="btn">"Back to Home"</span>
            </A>
        </div>
    }
}
