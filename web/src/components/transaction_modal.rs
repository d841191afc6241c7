//! Transaction status modal

use leptos::prelude::*;
use shared::state::TxStatus;

use crate::components::Modal;

fn status_heading(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Pending => "Transaction Pending",
        TxStatus::Success => "Transaction Successful",
        TxStatus::Error => "Transaction Failed",
        TxStatus::None => "Transaction Status",
    }
}

fn status_class(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Pending => "tx-status tx-pending",
        TxStatus::Success => "tx-status tx-success",
        TxStatus::Error => "tx-status tx-error",
        TxStatus::None => "tx-status",
    }
}

#[component]
pub fn TransactionStatusModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] status: Signal<TxStatus>,
    #[prop(into)] tx_id: Signal<Option<String>>,
    #[prop(into)] fee: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_close>
            <div class=move || status_class(status.get())>
                <h2>{move || status_heading(status.get())}</h2>

                <Show when=move || status.get() == TxStatus::Pending>
                    <div class="spinner"></div>
                    <p>"Waiting for confirmation..."</p>
                </Show>

                {move || fee.get().map(|fee| view! {
                    <p>"Fee: " <span class="mono">{fee}</span></p>
                })}

                {move || tx_id.get().map(|id| view! {
                    <p>"Transaction ID: " <span class="mono">{id}</span></p>
                })}

                {move || error.get().map(|err| view! {
                    <p class="error">"Error: " {err}</p>
                })}

                <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_heading_and_class() {
        for status in [TxStatus::None, TxStatus::Pending, TxStatus::Success, TxStatus::Error] {
            assert!(!status_heading(status).is_empty());
            assert!(status_class(status).starts_with("tx-status"));
        }
        assert_eq!(status_heading(TxStatus::Success), "Transaction Successful");
    }
}
