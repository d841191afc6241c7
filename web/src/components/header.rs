//! Header - navigation shell
//!
//! Owns the menu flag and hosts the wallet, admin and transaction modals.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::state::TxStatus;
use shared::AppRoute;

use crate::components::{HamburgerMenu, Modal, TransactionStatusModal, WalletStatus};
use crate::state::shell::use_shell_context;
use crate::utils::constants::{BRAND_NAME, TAGLINE};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_shell_context();
    let shell = ctx.shell;

    let nav_links = AppRoute::header_links()
        .iter()
        .map(|route| {
            view! {
                <A href=route.path() attr:class="nav-link">{route.title()}</A>
            }
        })
        .collect_view();

    let wallet_open = Signal::derive(move || shell.with(|s| s.wallet_modal_open));
    let admin_open = Signal::derive(move || shell.with(|s| s.admin_modal_open));
    let tx_open = Signal::derive(move || shell.with(|s| s.tx_modal_open));
    let tx_status = Signal::derive(move || shell.with(|s| s.transaction.status));

    view! {
        <header class="header">
            <div class="logo">
                <A href=AppRoute::Home.path() attr:class="logo-title">{BRAND_NAME}</A>
                <span class="tagline">{TAGLINE}</span>
            </div>

            <nav class="nav">{nav_links}</nav>

            <div class="hamburger-menu-wrapper">
                <button
                    class="hamburger"
                    aria-label="Open menu"
                    on:click=move |_| ctx.toggle_menu()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <HamburgerMenu
                    open=Signal::derive(move || ctx.menu_open())
                    dark_mode=Signal::derive(move || ctx.dark_mode())
                    on_close=Callback::new(move |_| ctx.close_menu())
                    on_toggle_dark_mode=Callback::new(move |_| ctx.toggle_dark_mode())
                    on_open_wallet=Callback::new(move |_| ctx.open_wallet_modal())
                    on_open_admin=Callback::new(move |_| ctx.open_admin_modal())
                />
            </div>

            <Modal open=wallet_open on_close=Callback::new(move |_| ctx.close_wallet_modal())>
                <h2>"Wallet Connection"</h2>
                <WalletStatus
                    is_connected=Signal::derive(move || shell.with(|s| s.wallet.is_connected()))
                    address=Signal::derive(move || shell.with(|s| s.wallet.address.clone()))
                    status=Signal::derive(move || shell.with(|s| s.wallet.status.clone()))
                    on_connect=Callback::new(move |_| ctx.connect())
                    on_disconnect=Callback::new(move |_| ctx.disconnect())
                />
            </Modal>

            <Modal open=admin_open on_close=Callback::new(move |_| ctx.close_admin_modal())>
                <h2>"Admin"</h2>
                <p>"Platform stats, verification queue and user, project and pool management."</p>
                <A href=AppRoute::AdminDashboard.path() on:click=move |_| ctx.close_admin_modal()>
                    <span class="btn">"Open Admin Dashboard"</span>
                </A>
            </Modal>

            <TransactionStatusModal
                open=tx_open
                status=tx_status
                tx_id=Signal::derive(move || shell.with(|s| s.transaction.id.clone()))
                fee=Signal::derive(move || shell.with(|s| s.transaction.fee.clone()))
                error=Signal::derive(move || shell.with(|s| s.transaction.error.clone()))
                on_close=Callback::new(move |_| ctx.close_tx_modal())
            />

            <Show when=move || tx_status.get() == TxStatus::Pending>
                <span class="tx-indicator" title="Transaction pending"></span>
            </Show>
        </header>
    }
}
