//! Reactive contexts

pub mod shell;
