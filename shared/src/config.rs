//! # Simulation Configuration
//!
//! The wallet connection and transaction confirmation are mocks. Their literal
//! values (placeholder address, fee, transaction id) and the confirmation delay
//! live here so the web layer and the tests read them from one place.
//!
//! ## Global Config Access
//!
//! ```rust
//! use shared::config::sim_config;
//!
//! let config = sim_config();
//! assert!(config.confirmation_delay_ms > 0);
//! ```
//!
//! [`init_config()`] may be called once at startup to install overrides. Without
//! it, [`sim_config()`] falls back to [`SimulationConfig::default`].

use std::env;
use std::sync::OnceLock;

use crate::error::{AppError, Result};

/// Delay before a simulated transaction is confirmed.
pub const DEFAULT_CONFIRMATION_DELAY_MS: u32 = 2_000;
pub const DEFAULT_WALLET_ADDRESS: &str = "SP2C2...EXAMPLE";
pub const DEFAULT_TX_FEE: &str = "0.0005 STX";
pub const DEFAULT_TX_ID: &str = "0xABC123...";

/// Fixed values used by the wallet/transaction simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Milliseconds between "pending" and "success"
    pub confirmation_delay_ms: u32,

    /// Address assigned on connect
    pub wallet_address: String,

    /// Fee shown while the transaction is pending
    pub tx_fee: String,

    /// Identifier shown once the transaction succeeds
    pub tx_id: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            tx_fee: DEFAULT_TX_FEE.to_string(),
            tx_id: DEFAULT_TX_ID.to_string(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// Reads `CINEX_TX_DELAY_MS`, `CINEX_WALLET_ADDRESS`, `CINEX_TX_FEE` and `CINEX_TX_ID`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// The wasm build has no process environment and passes values baked in with
    /// `option_env!` instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let confirmation_delay_ms = match lookup("CINEX_TX_DELAY_MS") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("CINEX_TX_DELAY_MS must be a valid number: {}", e))
            })?,
            None => defaults.confirmation_delay_ms,
        };

        Ok(Self {
            confirmation_delay_ms,
            wallet_address: lookup("CINEX_WALLET_ADDRESS").unwrap_or(defaults.wallet_address),
            tx_fee: lookup("CINEX_TX_FEE").unwrap_or(defaults.tx_fee),
            tx_id: lookup("CINEX_TX_ID").unwrap_or(defaults.tx_id),
        })
    }

    /// Reject values the simulation cannot display sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.confirmation_delay_ms == 0 {
            return Err(AppError::Config(
                "CINEX_TX_DELAY_MS must be greater than zero".to_string(),
            ));
        }

        for (name, value) in [
            ("CINEX_WALLET_ADDRESS", &self.wallet_address),
            ("CINEX_TX_FEE", &self.tx_fee),
            ("CINEX_TX_ID", &self.tx_id),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Install the global configuration after validating it.
///
/// # Errors
///
/// Fails if validation fails or a configuration was already installed.
pub fn init_config(config: SimulationConfig) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get the global configuration, installing the defaults on first use.
pub fn sim_config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_simulation_literals() {
        let config = SimulationConfig::default();
        assert_eq!(config.confirmation_delay_ms, 2000);
        assert_eq!(config.wallet_address, "SP2C2...EXAMPLE");
        assert_eq!(config.tx_fee, "0.0005 STX");
        assert_eq!(config.tx_id, "0xABC123...");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            ("CINEX_TX_DELAY_MS", "500"),
            ("CINEX_TX_FEE", "1 STX"),
        ]))
        .unwrap();

        assert_eq!(config.confirmation_delay_ms, 500);
        assert_eq!(config.tx_fee, "1 STX");
        assert_eq!(config.tx_id, DEFAULT_TX_ID);
    }

    #[test]
    fn test_from_lookup_rejects_bad_delay() {
        let result = SimulationConfig::from_lookup(lookup_from(&[("CINEX_TX_DELAY_MS", "soon")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_delay_and_empty_values() {
        let mut config = SimulationConfig::default();
        config.confirmation_delay_ms = 0;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.tx_id = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
