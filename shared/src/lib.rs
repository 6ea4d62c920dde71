//! Shared utilities and common types for the RefCat server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
