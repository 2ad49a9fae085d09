use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::warn;

use crate::constants::{
    CODE_INVALID_JSON, CODE_INVALID_QUERY, CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                // Health check and API document
                .route("/health", web::get().to(handlers::health_check))
                .route("/openapi.json", web::get().to(handlers::openapi_spec))
                // Categories
                .route("/categories", web::get().to(handlers::get_categories))
                .route(
                    "/categories/{id}/questions",
                    web::get().to(handlers::get_category_questions),
                )
                // Questions; search must not be shadowed by /{id}
                .route("/questions", web::get().to(handlers::get_questions))
                .route("/questions", web::post().to(handlers::create_question))
                .route(
                    "/questions/search",
                    web::post().to(handlers::search_questions),
                )
                .route(
                    "/questions/{id}",
                    web::delete().to(handlers::delete_question),
                )
                // Quizzes
                .route("/quizzes", web::post().to(handlers::play_quiz)),
        )
        // Drink routes (public listing, the rest need a permission scope)
        .service(
            web::resource("/drinks")
                .wrap(AuthMiddleware)
                .route(web::get().to(handlers::get_drinks))
                .route(web::post().to(handlers::create_drink)),
        )
        .service(
            web::resource("/drinks-detail")
                .wrap(AuthMiddleware)
                .route(web::get().to(handlers::get_drinks_detail)),
        )
        .service(
            web::resource("/drinks/{id}")
                .wrap(AuthMiddleware)
                .route(web::patch().to(handlers::update_drink))
                .route(web::delete().to(handlers::delete_drink)),
        )
        .default_service(web::to(not_found));
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Malformed JSON body on {}: {}", req.path(), err);
    ApiError::bad_request(CODE_INVALID_JSON, &err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Malformed query string on {}: {}", req.path(), err);
    ApiError::bad_request(CODE_INVALID_QUERY, &err.to_string()).into()
}

/// Path segments that do not parse as ids name nothing.
fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!("Unparseable path {}: {}", req.path(), err);
    ApiError::not_found(CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND).into()
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!("No route for {} {}", req.method(), req.path());
    ApiError::not_found(CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND).error_response()
}
