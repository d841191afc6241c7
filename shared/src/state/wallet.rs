//! Simulated wallet session.

use crate::config::SimulationConfig;

pub const STATUS_CONNECTED: &str = "Connected";
pub const STATUS_DISCONNECTED: &str = "Disconnected";

/// Client-side record of a mocked wallet connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    pub connected: bool,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn connect(&mut self, config: &SimulationConfig) {
        self.connected = true;
        self.address = Some(config.wallet_address.clone());
        self.status = Some(STATUS_CONNECTED.to_string());
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.address = None;
        self.status = Some(STATUS_DISCONNECTED.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_disconnected() {
        let session = WalletSession::new();
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);
        assert_eq!(session.status(), None);
    }

    #[test]
    fn test_connect_then_disconnect() {
        let config = SimulationConfig::default();
        let mut session = WalletSession::new();

        session.connect(&config);
        assert!(session.is_connected());
        assert_eq!(session.address(), Some("SP2C2...EXAMPLE"));
        assert_eq!(session.status(), Some("Connected"));

        session.disconnect();
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);
        assert_eq!(session.status(), Some("Disconnected"));
    }
}
