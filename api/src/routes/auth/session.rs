use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::SessionResponse;
use crate::middleware::auth::extract_bearer_token;

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::CredentialVerifier;

use super::AppState;

/// Handler for GET /api/v1/auth/session
///
/// Reports whether the presented bearer token authenticates. This endpoint
/// never fails: a missing, malformed, expired, or revoked token simply
/// yields `authenticated: false`.
pub async fn session<V, T>(req: HttpRequest, state: web::Data<AppState<V, T>>) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    let token = extract_bearer_token(req.headers());
    let authenticated = state.auth_service.is_authenticated(token.as_deref()).await;

    HttpResponse::Ok().json(SessionResponse { authenticated })
}
