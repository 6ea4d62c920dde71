//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RefCat backend,
//! following Clean Architecture principles. It provides concrete
//! implementations for database access:
//!
//! - **Database**: MySQL implementations using SQLx
//!   - token repository (the durable token store)
//!   - credential verifier (bcrypt over the users table)

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
