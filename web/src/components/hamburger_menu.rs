//! Collapsible menu panel opened from the header

use leptos::prelude::*;
use leptos_router::components::A;
use shared::AppRoute;

#[component]
pub fn HamburgerMenu(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] dark_mode: Signal<bool>,
    on_close: Callback<()>,
    on_toggle_dark_mode: Callback<()>,
    on_open_wallet: Callback<()>,
    on_open_admin: Callback<()>,
) -> impl IntoView {
    let links = AppRoute::menu_links()
        .iter()
        .map(|route| {
            view! {
                <li>
                    <A href=route.path() on:click=move |_| on_close.run(())>
                        {route.title()}
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="hamburger-menu" class:open=move || open.get()>
            <ul class="hamburger-links">{links}</ul>
            <div class="hamburger-actions">
                <button class="btn" on:click=move |_| on_open_wallet.run(())>
                    "Connect Wallet"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_open_admin.run(())>
                    "Admin"
                </button>
                <button class="btn btn-ghost" on:click=move |_| on_toggle_dark_mode.run(())>
                    {move || if dark_mode.get() { "Light Mode" } else { "Dark Mode" }}
                </button>
            </div>
        </div>
    }
}
