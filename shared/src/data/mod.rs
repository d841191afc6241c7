//! Hard-coded placeholder content rendered by the pages.

pub mod dashboard;
pub mod genres;
pub mod projects;
pub mod waitlist;

pub use genres::{group_for_category, GenreCategory, GENRE_CATEGORIES};
pub use projects::{featured_projects, filter_projects, placeholder_projects, ProjectSummary};
pub use waitlist::{Question, QuestionKind, OTHER_OPTION, WAITLIST_QUESTIONS};
