//! # CineX Shared State Library
//!
//! Everything the CineX front-end knows that is not markup: the view state
//! machines, the placeholder content and the route table. The `web` crate wraps
//! these types in Leptos signals; keeping them here lets them run and be tested
//! on the host.
//!
//! ## Structure
//!
//! - **[`state`]**: shell (menu, modals), wallet session, transaction simulation, waitlist survey
//! - **[`data`]**: placeholder projects, genre catalogue, dashboard records, waitlist questions
//! - **[`routes`]**: client-side route table
//! - **[`config`]**: simulation constants
//! - **[`error`]**: [`error::AppError`]
//! - **[`utils`]**: number and address formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::config::SimulationConfig;
//! use shared::state::{ShellState, TxStatus};
//!
//! let config = SimulationConfig::default();
//! let mut shell = ShellState::new();
//!
//! let confirmation = shell.connect(&config);
//! assert_eq!(shell.tx_status(), TxStatus::Pending);
//!
//! // `confirmation.delay_ms` later:
//! shell.confirm_transaction(&confirmation);
//! assert_eq!(shell.tx_status(), TxStatus::Success);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

pub use error::{AppError, Result};
pub use routes::AppRoute;
pub use utils::*;
