//! Bearer-token authentication middleware
//!
//! Extracts the bearer token from the Authorization header, runs it through
//! the auth service, and injects the authenticated user into request
//! extensions. Routes outside the auth subsystem (catalogs, files,
//! favorites) wrap themselves in [`RequireAuth`] and take an
//! [`AuthContext`] argument.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorUnauthorized, InternalError},
    http::header::{self, HeaderMap},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::{AuthService, CredentialVerifier};
use rf_shared::errors::{error_codes, ErrorResponse};

/// Extracts the bearer token from an Authorization header
///
/// The scheme is matched case-insensitively and surrounding whitespace is
/// trimmed. A missing header, a different scheme, or an empty token all
/// yield `None`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, rest) = value.split_once(char::is_whitespace)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = rest.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Object-safe view of the auth service used by the middleware
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate a bearer token and return the authenticated user id
    async fn authenticate(&self, token: Option<&str>) -> Option<i64>;
}

#[async_trait]
impl<V, T> Authenticator for AuthService<V, T>
where
    V: CredentialVerifier,
    T: TokenRepository,
{
    async fn authenticate(&self, token: Option<&str>) -> Option<i64> {
        AuthService::authenticate(self, token).await
    }
}

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID of the authenticated caller
    pub user_id: i64,
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Authentication middleware factory
///
/// Rejects the request with a 401 JSON body unless the bearer token
/// authenticates against the registered [`Authenticator`].
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(authenticator) = req
                .app_data::<web::Data<Arc<dyn Authenticator>>>()
                .cloned()
            else {
                return Err(unauthorized("Authentication is not configured"));
            };

            let token = extract_bearer_token(req.headers());

            match authenticator.authenticate(token.as_deref()).await {
                Some(user_id) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                    service.call(req).await
                }
                None => Err(unauthorized("Authentication required")),
            }
        })
    }
}

/// 401 error carrying a JSON body
fn unauthorized(message: &str) -> Error {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(error_codes::UNAUTHORIZED, message));
    InternalError::from_response(message.to_string(), response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, value))
            .to_http_request();
        req.headers().clone()
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with_authorization("Bearer test_token_123");
        assert_eq!(
            extract_bearer_token(&headers),
            Some("test_token_123".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_scheme_is_case_insensitive() {
        for value in ["bearer token-x", "BEARER token-x", "BeArEr token-x"] {
            let headers = headers_with_authorization(value);
            assert_eq!(extract_bearer_token(&headers), Some("token-x".to_string()));
        }
    }

    #[test]
    fn test_extract_bearer_token_trims_whitespace() {
        let headers = headers_with_authorization("  Bearer   token-x  ");
        assert_eq!(extract_bearer_token(&headers), Some("token-x".to_string()));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_rejects_bare_value() {
        let headers = headers_with_authorization("test_token_123");
        assert_eq!(extract_bearer_token(&headers), None);

        let headers = headers_with_authorization("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(req.headers()), None);
    }
}
