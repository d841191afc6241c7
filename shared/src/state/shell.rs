//! Header state: menu, modals, wallet session and the transaction simulation.

use crate::config::SimulationConfig;
use crate::state::transaction::{Confirmation, TransactionRecord, TxStatus};
use crate::state::wallet::WalletSession;

/// Everything the navigation shell owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub menu_open: bool,
    pub dark_mode: bool,
    pub wallet_modal_open: bool,
    pub admin_modal_open: bool,
    pub tx_modal_open: bool,
    pub wallet: WalletSession,
    pub transaction: TransactionRecord,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn open_wallet_modal(&mut self) {
        self.wallet_modal_open = true;
        self.menu_open = false;
    }

    pub fn close_wallet_modal(&mut self) {
        self.wallet_modal_open = false;
    }

    pub fn open_admin_modal(&mut self) {
        self.admin_modal_open = true;
        self.menu_open = false;
    }

    pub fn close_admin_modal(&mut self) {
        self.admin_modal_open = false;
    }

    /// Connect the wallet and start a pending transaction.
    ///
    /// The caller schedules [`ShellState::confirm_transaction`] after
    /// `confirmation.delay_ms`.
    pub fn connect(&mut self, config: &SimulationConfig) -> Confirmation {
        self.wallet.connect(config);
        let confirmation = self.transaction.start(config);
        self.tx_modal_open = true;
        confirmation
    }

    /// Leaves any in-flight transaction untouched.
    pub fn disconnect(&mut self) {
        self.wallet.disconnect();
    }

    pub fn confirm_transaction(&mut self, confirmation: &Confirmation) -> bool {
        self.transaction.confirm(confirmation)
    }

    pub fn close_tx_modal(&mut self) {
        self.tx_modal_open = false;
        self.transaction.clear();
    }

    pub fn tx_status(&self) -> TxStatus {
        self.transaction.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_menu_twice_restores_state() {
        let mut shell = ShellState::new();
        for initial in [false, true] {
            shell.menu_open = initial;
            shell.toggle_menu();
            assert_eq!(shell.menu_open, !initial);
            shell.toggle_menu();
            assert_eq!(shell.menu_open, initial);
        }
    }

    #[test]
    fn test_opening_modals_collapses_menu() {
        let mut shell = ShellState::new();

        shell.toggle_menu();
        shell.open_wallet_modal();
        assert!(shell.wallet_modal_open);
        assert!(!shell.menu_open);

        shell.toggle_menu();
        shell.open_admin_modal();
        assert!(shell.admin_modal_open);
        assert!(!shell.menu_open);

        shell.close_wallet_modal();
        shell.close_admin_modal();
        assert!(!shell.wallet_modal_open);
        assert!(!shell.admin_modal_open);
    }

    #[test]
    fn test_connect_opens_pending_transaction() {
        let config = SimulationConfig::default();
        let mut shell = ShellState::new();

        let confirmation = shell.connect(&config);
        assert!(shell.wallet.is_connected());
        assert!(shell.tx_modal_open);
        assert_eq!(shell.tx_status(), TxStatus::Pending);

        assert!(shell.confirm_transaction(&confirmation));
        assert_eq!(shell.tx_status(), TxStatus::Success);
    }

    #[test]
    fn test_disconnect_keeps_pending_transaction() {
        let config = SimulationConfig::default();
        let mut shell = ShellState::new();

        let confirmation = shell.connect(&config);
        shell.disconnect();
        assert!(!shell.wallet.is_connected());
        assert_eq!(shell.tx_status(), TxStatus::Pending);
        assert_eq!(shell.transaction.fee.as_deref(), Some("0.0005 STX"));

        assert!(shell.confirm_transaction(&confirmation));
        assert_eq!(shell.tx_status(), TxStatus::Success);
        assert!(!shell.wallet.is_connected());
    }

    #[test]
    fn test_close_tx_modal_clears_record() {
        let config = SimulationConfig::default();
        let mut shell = ShellState::new();

        let confirmation = shell.connect(&config);
        shell.close_tx_modal();
        assert!(!shell.tx_modal_open);
        assert!(shell.transaction.is_empty());

        assert!(!shell.confirm_transaction(&confirmation));
        assert!(shell.transaction.is_empty());
        assert!(shell.wallet.is_connected());
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut shell = ShellState::new();
        shell.toggle_dark_mode();
        assert!(shell.dark_mode);
        shell.toggle_dark_mode();
        assert!(!shell.dark_mode);
    }
}
