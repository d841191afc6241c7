//! Shell state management
//!
//! Wraps [`ShellState`] in a signal shared through context, and runs the
//! delayed confirmation of the simulated transaction.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::config::sim_config;
use shared::state::{ShellState, TransactionRecord, WalletSession};

/// Global header context
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub shell: RwSignal<ShellState>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self {
            shell: RwSignal::new(ShellState::new()),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.shell.with(|s| s.menu_open)
    }

    pub fn dark_mode(&self) -> bool {
        self.shell.with(|s| s.dark_mode)
    }

    pub fn wallet(&self) -> WalletSession {
        self.shell.with(|s| s.wallet.clone())
    }

    pub fn transaction(&self) -> TransactionRecord {
        self.shell.with(|s| s.transaction.clone())
    }

    pub fn toggle_menu(&self) {
        self.shell.update(|s| s.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.shell.update(|s| s.close_menu());
    }

    pub fn toggle_dark_mode(&self) {
        self.shell.update(|s| s.toggle_dark_mode());
    }

    pub fn open_wallet_modal(&self) {
        self.shell.update(|s| s.open_wallet_modal());
    }

    pub fn close_wallet_modal(&self) {
        self.shell.update(|s| s.close_wallet_modal());
    }

    pub fn open_admin_modal(&self) {
        self.shell.update(|s| s.open_admin_modal());
    }

    pub fn close_admin_modal(&self) {
        self.shell.update(|s| s.close_admin_modal());
    }

    /// Connect the mock wallet and schedule the transaction confirmation.
    pub fn connect(&self) {
        let config = sim_config();
        let Some(confirmation) = self.shell.try_update(|s| s.connect(config)) else {
            log::warn!("Connect ignored: shell context disposed");
            return;
        };
        log::info!(
            "Wallet connected; transaction {} pending for {}ms",
            confirmation.ticket,
            confirmation.delay_ms
        );

        let shell = self.shell;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(confirmation.delay_ms).await;

            match shell.try_update(|s| s.confirm_transaction(&confirmation)) {
                Some(true) => log::info!("Transaction {} confirmed", confirmation.ticket),
                Some(false) => log::debug!("Transaction {} no longer pending", confirmation.ticket),
                None => log::debug!("Shell disposed before transaction {} confirmed", confirmation.ticket),
            }
        });
    }

    pub fn disconnect(&self) {
        self.shell.update(|s| s.disconnect());
        log::info!("Wallet disconnected");
    }

    pub fn close_tx_modal(&self) {
        self.shell.update(|s| s.close_tx_modal());
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_shell_context() -> ShellContext {
    let context = ShellContext::new();
    provide_context(context);
    context
}

pub fn use_shell_context() -> ShellContext {
    expect_context::<ShellContext>()
}
