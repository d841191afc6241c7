//! View state machines driven by the web components.

pub mod shell;
pub mod survey;
pub mod transaction;
pub mod wallet;

pub use shell::ShellState;
pub use survey::{SurveyAnswers, SurveyForm, SurveyPhase, CONFIRMATION_MESSAGE};
pub use transaction::{Confirmation, TransactionRecord, TxStatus};
pub use wallet::WalletSession;
