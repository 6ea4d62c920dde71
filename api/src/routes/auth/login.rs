use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::CredentialVerifier;
use rf_shared::errors::{error_codes, ErrorResponse};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the submitted credentials and returns a freshly issued bearer
/// token with its expiry.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "<signed JWT>",
///     "expires_at": "2024-01-15T13:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed email or empty password
/// - 401 Unauthorized: Unknown email, wrong password, or unverified email
/// - 429 Too Many Requests: Attempt limit exceeded
/// - 500 Internal Server Error: Token could not be stored
pub async fn login<V, T>(
    req: HttpRequest,
    state: web::Data<AppState<V, T>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    if let Err(errors) = body.validate() {
        return HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid login request")
                .add_detail("errors", errors.to_string()),
        );
    }

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match state
        .auth_service
        .login(&body.email, &body.password, user_agent)
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
