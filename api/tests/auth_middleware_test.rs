//! Tests for the RequireAuth middleware guarding protected routes

use std::sync::Arc;

use actix_web::{http::header, test, web, App, HttpResponse};
use async_trait::async_trait;

use rf_api::middleware::auth::{AuthContext, Authenticator, RequireAuth};

/// Authenticator recognising a single fixed token
struct SingleTokenAuthenticator {
    token: &'static str,
    user_id: i64,
}

#[async_trait]
impl Authenticator for SingleTokenAuthenticator {
    async fn authenticate(&self, token: Option<&str>) -> Option<i64> {
        (token? == self.token).then_some(self.user_id)
    }
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id }))
}

fn test_authenticator() -> web::Data<Arc<dyn Authenticator>> {
    web::Data::new(Arc::new(SingleTokenAuthenticator {
        token: "valid-token",
        user_id: 42,
    }) as Arc<dyn Authenticator>)
}

#[actix_web::test]
async fn test_protected_route_with_valid_token() {
    let app = test::init_service(
        App::new().app_data(test_authenticator()).service(
            web::resource("/protected")
                .wrap(RequireAuth)
                .route(web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, "Bearer valid-token"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user_id"], 42);
}

#[actix_web::test]
async fn test_protected_route_without_token() {
    let app = test::init_service(
        App::new().app_data(test_authenticator()).service(
            web::resource("/protected")
                .wrap(RequireAuth)
                .route(web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_protected_route_with_unknown_token() {
    let app = test::init_service(
        App::new().app_data(test_authenticator()).service(
            web::resource("/protected")
                .wrap(RequireAuth)
                .route(web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header((header::AUTHORIZATION, "Bearer revoked-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}
