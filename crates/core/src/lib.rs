//! Shared domain types and errors for the Holocron catalog service.

pub mod error;
pub mod types;
