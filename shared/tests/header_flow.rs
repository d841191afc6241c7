//! # Header Flow Tests
//!
//! Drives the shell the way the header component does: menu, wallet modal,
//! connect, delayed confirmation, close.

use shared::config::SimulationConfig;
use shared::state::{ShellState, TxStatus};

fn fast_config() -> SimulationConfig {
    SimulationConfig {
        confirmation_delay_ms: 10,
        ..SimulationConfig::default()
    }
}

#[test]
fn test_connect_from_menu_to_confirmed_transaction() {
    // Arrange
    let config = fast_config();
    let mut shell = ShellState::new();

    // Act
    shell.toggle_menu();
    shell.open_wallet_modal();
    let confirmation = shell.connect(&config);

    // Assert
    assert!(!shell.menu_open);
    assert!(shell.wallet_modal_open);
    assert!(shell.tx_modal_open);
    assert_eq!(confirmation.delay_ms, 10);
    assert_eq!(shell.tx_status(), TxStatus::Pending);

    assert!(shell.confirm_transaction(&confirmation));
    assert_eq!(shell.tx_status(), TxStatus::Success);
    assert_eq!(shell.transaction.id.as_deref(), Some("0xABC123..."));
    assert_eq!(shell.wallet.address(), Some("SP2C2...EXAMPLE"));
}

#[test]
fn test_reconnect_after_close_starts_fresh_simulation() {
    let config = fast_config();
    let mut shell = ShellState::new();

    let stale = shell.connect(&config);
    shell.close_tx_modal();
    shell.disconnect();

    let fresh = shell.connect(&config);
    assert!(!shell.confirm_transaction(&stale));
    assert_eq!(shell.tx_status(), TxStatus::Pending);

    assert!(shell.confirm_transaction(&fresh));
    assert_eq!(shell.tx_status(), TxStatus::Success);
    assert!(shell.wallet.is_connected());
}

#[test]
fn test_disconnect_at_any_point_keeps_transaction_state() {
    let config = fast_config();

    for disconnect_after_confirm in [false, true] {
        let mut shell = ShellState::new();
        let confirmation = shell.connect(&config);

        if disconnect_after_confirm {
            shell.confirm_transaction(&confirmation);
        }
        let before = shell.transaction.clone();

        shell.disconnect();

        assert!(!shell.wallet.is_connected());
        assert_eq!(shell.transaction, before);
    }
}
