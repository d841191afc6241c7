//! Browser helpers and app-wide constants

pub mod constants;
pub mod dom;
