//! Domain error to HTTP response mapping
//!
//! Login/logout failures arrive here as typed errors; validation failures
//! never do (they resolve to booleans upstream). Status mapping: credential
//! failures are 401, a missing logout token is 400, throttling is 429, and
//! storage or configuration failures are 500.

use actix_web::HttpResponse;

use rf_core::errors::{AuthError, DomainError};
use rf_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into an HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication failed"),
            ),
            AuthError::EmailNotVerified => HttpResponse::Unauthorized().json(
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Email address not verified"),
            ),
            AuthError::RateLimited => HttpResponse::TooManyRequests().json(
                ErrorResponse::new(
                    error_codes::RATE_LIMIT_EXCEEDED,
                    "Too many attempts, try again later",
                ),
            ),
            AuthError::MissingToken => HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::MISSING_TOKEN,
                "No token provided",
            )),
        },
        DomainError::Storage { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new(error_codes::DATABASE_ERROR, "A storage error occurred"),
        ),
        DomainError::Configuration { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}
