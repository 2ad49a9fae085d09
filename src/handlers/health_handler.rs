//! Service health and API documentation handlers.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

/// Report that the server is up
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

/// Serve the OpenAPI document as JSON
pub async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    use crate::test_helpers::{init_app, seeded_repositories};

    #[actix_web::test]
    async fn test_health_check() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");
    }

    #[actix_web::test]
    async fn test_openapi_lists_routes() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);

        let req = test::TestRequest::get()
            .uri("/api/openapi.json")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["paths"].get("/api/questions/search").is_some());
        assert!(body["paths"].get("/drinks/{id}").is_some());
        assert!(body["components"]["securitySchemes"]
            .get("bearer_auth")
            .is_some());
    }
}
