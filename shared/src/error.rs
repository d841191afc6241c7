//! # Centralized Error Handling
//!
//! [`AppError`] is the single error type returned by the view state machines and
//! the configuration loader. Nothing here is user-facing: survey answers are never
//! validated, and the wallet simulation cannot fail. These variants report
//! programmatic misuse (an unknown question key, a mutation after submission) so
//! callers can log it instead of silently dropping the event.
//!
//! ## Usage Example
//!
//! ```rust
//! use shared::error::{AppError, Result};
//!
//! fn require_key(key: &str) -> Result<&str> {
//!     if key.is_empty() {
//!         return Err(AppError::Config("empty key".to_string()));
//!     }
//!     Ok(key)
//! }
//!
//! assert!(require_key("").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised by the survey and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The survey rejected an operation.
    #[error("Survey error: {0}")]
    Survey(#[from] SurveyError),

    /// Configuration error while loading or validating simulation settings.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a survey operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("unknown question key '{0}'")]
    UnknownQuestion(String),

    #[error("'{option}' is not an option of question '{key}'")]
    UnknownOption { key: String, option: String },

    #[error("question '{0}' is single-select")]
    NotMultiSelect(String),

    #[error("question '{0}' is multi-select")]
    NotSingleSelect(String),

    #[error("question '{0}' has no free-text field")]
    NoOtherField(String),

    #[error("survey has already been submitted")]
    AlreadySubmitted,
}
