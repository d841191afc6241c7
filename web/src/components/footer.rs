//! Site footer

use leptos::prelude::*;

use crate::utils::constants::{BRAND_NAME, FOOTER_LINKS, SOCIAL_LINKS};
use crate::utils::dom::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="links">
                {FOOTER_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </div>
            <div class="social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer">{*label}</a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="copy">
                {format!("© {} {}. All Rights Reserved.", year, BRAND_NAME)}
            </div>
        </footer>
    }
}
