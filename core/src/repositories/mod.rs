//! Repository interfaces for persistence operations.

pub mod token;

pub use token::{MockTokenRepository, TokenRepository};
