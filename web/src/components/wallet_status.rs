//! Wallet status widget - shows the session and hands actions back to the header

use leptos::prelude::*;
use shared::utils::display_address;

/// Text of the address line; empty until an address is assigned.
fn address_text(address: Option<&str>) -> String {
    address.map(display_address).unwrap_or_default()
}

#[component]
pub fn WalletStatus(
    #[prop(into)] is_connected: Signal<bool>,
    #[prop(into)] address: Signal<Option<String>>,
    #[prop(into)] status: Signal<Option<String>>,
    on_connect: Callback<()>,
    on_disconnect: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wallet-status">
            {move || {
                if is_connected.get() {
                    view! {
                        <div>
                            <p class="wallet-status-label">"Status"</p>
                            <p class="wallet-status-connected">
                                {move || status.get().unwrap_or_else(|| "Connected".to_string())}
                            </p>
                            <p class="wallet-status-label">"Wallet Address"</p>
                            <p
                                class="wallet-address"
                                title=move || address.get().unwrap_or_default()
                            >
                                {move || address.with(|a| address_text(a.as_deref()))}
                            </p>
                            <button class="btn btn-danger" on:click=move |_| on_disconnect.run(())>
                                "Disconnect Wallet"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div>
                            <p class="wallet-status-label">
                                {move || status.get().unwrap_or_else(|| "No wallet connected".to_string())}
                            </p>
                            <button class="btn" on:click=move |_| on_connect.run(())>
                                "Connect Hiro Wallet"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_text() {
        assert_eq!(address_text(None), "");
        assert_eq!(address_text(Some("SP2C2...EXAMPLE")), "SP2C2...EXAMPLE");
        assert_eq!(
            address_text(Some("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")),
            "SP2J6Z...9EJ7"
        );
    }
}
