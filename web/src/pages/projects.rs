//! Project explorer - search box and genre filter over the listing

use leptos::prelude::*;
use shared::data::{filter_projects, placeholder_projects, GENRE_CATEGORIES};

use crate::components::ProjectCard;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let projects = StoredValue::new(placeholder_projects());

    let genre_groups = GENRE_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let options = category
                .options()
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view();
            view! {
                <optgroup label=format!("{}. {}", index + 1, category.name)>{options}</optgroup>
            }
        })
        .collect_view();

    let results = move || {
        let query = query.get();
        let genre = genre.get();
        projects.with_value(|all| {
            let hits: Vec<_> = filter_projects(all, &query, &genre)
                .into_iter()
                .cloned()
                .collect();
            log::debug!("Project filter '{}' / '{}' -> {} hits", query, genre, hits.len());

            if hits.is_empty() {
                view! { <p class="empty">"No projects match your search."</p> }.into_any()
            } else {
                hits.into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect_view()
                    .into_any()
            }
        })
    };

    view! {
        <div class="projects-page">
            <header class="projects-header">
                <h1>"Explore Film Projects"</h1>
                <div class="search-and-filter">
                    <input
                        type="text"
                        placeholder="Search projects..."
                        class="search-input"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| set_genre.set(event_target_value(&ev))
                    >
                        <option value="">"All Genres"</option>
                        {genre_groups}
                    </select>
                </div>
            </header>
            <div class="project-grid">{results}</div>
        </div>
    }
}
