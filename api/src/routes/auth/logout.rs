use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::CredentialVerifier;

use super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented bearer token by deleting its store record. A
/// request without a token is a client error; revoking a token that no
/// longer exists succeeds.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: No token presented
/// - 500 Internal Server Error: Deletion failed at the storage level
pub async fn logout<V, T>(req: HttpRequest, state: web::Data<AppState<V, T>>) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    let token = extract_bearer_token(req.headers());

    match state.auth_service.logout(token.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
