//! UI Components

pub mod footer;
pub mod hamburger_menu;
pub mod header;
pub mod modal;
pub mod project_card;
pub mod transaction_modal;
pub mod wallet_status;

pub use footer::Footer;
pub use hamburger_menu::HamburgerMenu;
pub use header::Header;
pub use modal::Modal;
pub use project_card::ProjectCard;
pub use transaction_modal::TransactionStatusModal;
pub use wallet_status::WalletStatus;
