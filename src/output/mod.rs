//! Report formatting: human-readable terminal output and JSON.

pub mod json;
pub mod terminal;
