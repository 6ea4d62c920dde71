//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`] so that the
//! binary and the integration tests share identical routing and middleware.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::Authenticator;
use crate::routes::auth::{login::login, logout::logout, session::session, AppState};

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::CredentialVerifier;
use rf_shared::errors::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<V, T>(
    app_state: web::Data<AppState<V, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    // Object-safe handle for the bearer-token middleware
    let authenticator: Arc<dyn Authenticator> = app_state.auth_service.clone();

    // CORS policy is owned by the deployment; stay permissive here
    let cors = Cors::permissive();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(authenticator))
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<V, T>))
                    .route("/logout", web::post().to(logout::<V, T>))
                    .route("/session", web::get().to(session::<V, T>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "refcat-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
