use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use rf_api::app::create_app;
use rf_api::routes::auth::AppState;
use rf_core::services::auth::AuthService;
use rf_core::services::token::{
    TokenService, TokenServiceConfig, TokenSweepConfig, TokenSweepTask,
};
use rf_infra::database::{DatabasePool, MySqlCredentialVerifier, MySqlTokenRepository};
use rf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RefCat API server");

    // A missing JWT secret is fatal; the service must not start without it
    let config = AppConfig::from_env().map_err(fatal)?;

    let pool = DatabasePool::new(&config.database).await.map_err(fatal)?;
    pool.run_migrations().await.map_err(fatal)?;

    let token_service = Arc::new(
        TokenService::new(
            MySqlTokenRepository::new(pool.get_pool().clone()),
            TokenServiceConfig::from_jwt_config(&config.auth.jwt),
        )
        .map_err(fatal)?,
    );

    let verifier = Arc::new(MySqlCredentialVerifier::new(pool.get_pool().clone()));
    let auth_service = Arc::new(AuthService::new(verifier, token_service));

    // Expired token records are removed by a periodic background sweep,
    // decoupled from the request path
    let sweep_repository = Arc::new(MySqlTokenRepository::new(pool.get_pool().clone()));
    Arc::new(TokenSweepTask::new(
        sweep_repository,
        TokenSweepConfig::default(),
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState { auth_service });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

/// Map a startup error to an io::Error so main can bail out with context
fn fatal(error: impl std::fmt::Display) -> io::Error {
    log::error!("Startup failed: {}", error);
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
