//! Request and response data transfer objects

pub mod auth;

pub use auth::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse};
pub use rf_shared::errors::ErrorResponse;
