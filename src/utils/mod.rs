//! Shared utilities

pub mod git;
pub mod terminal;
