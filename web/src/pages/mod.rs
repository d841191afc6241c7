//! Page modules

pub mod admin_dashboard;
pub mod campaigns;
pub mod dashboard;
pub mod home;
pub mod placeholder;
pub mod projects;
pub mod waitlist;

pub use admin_dashboard::AdminDashboardPage;
pub use campaigns::CampaignsPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use placeholder::PlaceholderPage;
pub use projects::ProjectsPage;
pub use waitlist::WaitlistPage;
