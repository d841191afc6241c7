//! Simulated transaction lifecycle.
//!
//! A simulation starts in [`TxStatus::Pending`] and is resolved later by a
//! delayed task holding a [`Confirmation`]. Every start and every clear bumps the
//! record's ticket, so a confirmation that outlives its simulation is dropped.

use std::fmt;

use crate::config::SimulationConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxStatus {
    #[default]
    None,
    Pending,
    Success,
    Error,
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TxStatus::None => "none",
            TxStatus::Pending => "pending",
            TxStatus::Success => "success",
            TxStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// Handle for the delayed confirmation of one simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub ticket: u64,
    pub delay_ms: u32,
    pub tx_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    pub status: TxStatus,
    pub id: Option<String>,
    pub fee: Option<String>,
    pub error: Option<String>,
    ticket: u64,
}

impl TransactionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.status == TxStatus::None
            && self.id.is_none()
            && self.fee.is_none()
            && self.error.is_none()
    }

    /// Enter `Pending` with the configured fee. Any earlier confirmation is invalidated.
    pub fn start(&mut self, config: &SimulationConfig) -> Confirmation {
        self.ticket = self.ticket.wrapping_add(1);
        self.status = TxStatus::Pending;
        self.id = None;
        self.error = None;
        self.fee = Some(config.tx_fee.clone());

        log::debug!("transaction simulation {} pending", self.ticket);

        Confirmation {
            ticket: self.ticket,
            delay_ms: config.confirmation_delay_ms,
            tx_id: config.tx_id.clone(),
        }
    }

    /// Resolve to `Success`. Returns `false` when the confirmation is stale.
    pub fn confirm(&mut self, confirmation: &Confirmation) -> bool {
        if !self.accepts(confirmation) {
            log::debug!("dropping stale confirmation {}", confirmation.ticket);
            return false;
        }

        self.status = TxStatus::Success;
        self.id = Some(confirmation.tx_id.clone());
        true
    }

    /// Resolve to `Error`. The simulation never produces this on its own.
    pub fn fail(&mut self, confirmation: &Confirmation, error: impl Into<String>) -> bool {
        if !self.accepts(confirmation) {
            return false;
        }

        self.status = TxStatus::Error;
        self.error = Some(error.into());
        true
    }

    /// Reset every field and invalidate the outstanding confirmation.
    pub fn clear(&mut self) {
        let ticket = self.ticket.wrapping_add(1);
        *self = Self {
            ticket,
            ..Self::default()
        };
    }

    fn accepts(&self, confirmation: &Confirmation) -> bool {
        self.status == TxStatus::Pending && confirmation.ticket == self.ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_confirm() {
        let config = SimulationConfig::default();
        let mut tx = TransactionRecord::new();

        let confirmation = tx.start(&config);
        assert_eq!(tx.status, TxStatus::Pending);
        assert_eq!(tx.fee.as_deref(), Some("0.0005 STX"));
        assert_eq!(tx.id, None);
        assert_eq!(confirmation.delay_ms, 2000);

        assert!(tx.confirm(&confirmation));
        assert_eq!(tx.status, TxStatus::Success);
        assert_eq!(tx.id.as_deref(), Some("0xABC123..."));
    }

    #[test]
    fn test_clear_drops_late_confirmation() {
        let config = SimulationConfig::default();
        let mut tx = TransactionRecord::new();

        let confirmation = tx.start(&config);
        tx.clear();
        assert!(tx.is_empty());

        assert!(!tx.confirm(&confirmation));
        assert!(tx.is_empty());
    }

    #[test]
    fn test_restart_supersedes_previous_ticket() {
        let config = SimulationConfig::default();
        let mut tx = TransactionRecord::new();

        let first = tx.start(&config);
        let second = tx.start(&config);
        assert_ne!(first.ticket, second.ticket);

        assert!(!tx.confirm(&first));
        assert_eq!(tx.status, TxStatus::Pending);
        assert!(tx.confirm(&second));
    }

    #[test]
    fn test_confirm_only_once() {
        let config = SimulationConfig::default();
        let mut tx = TransactionRecord::new();

        let confirmation = tx.start(&config);
        assert!(tx.confirm(&confirmation));
        assert!(!tx.confirm(&confirmation));
        assert!(!tx.fail(&confirmation, "late"));
        assert_eq!(tx.status, TxStatus::Success);
    }

    #[test]
    fn test_error_state_is_representable() {
        let config = SimulationConfig::default();
        let mut tx = TransactionRecord::new();

        let confirmation = tx.start(&config);
        assert!(tx.fail(&confirmation, "rejected by node"));
        assert_eq!(tx.status, TxStatus::Error);
        assert_eq!(tx.error.as_deref(), Some("rejected by node"));

        // A failed simulation stays failed.
        assert!(!tx.confirm(&confirmation));
        assert_eq!(tx.status, TxStatus::Error);
        assert!(tx.id.is_none());
        assert_eq!(tx.status.to_string(), "error");
    }
}
