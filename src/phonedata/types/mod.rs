//! Foundational data structures, error types, and decoder options.

pub mod card_type;
pub mod error;
pub mod models;
pub mod options;
