//! Coffee shop drink handlers.
//!
//! `GET /drinks` is public. Every other endpoint requires a bearer token
//! carrying the matching permission scope.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{
    PERM_DELETE_DRINKS, PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS, PERM_POST_DRINKS,
};
use crate::errors::ApiError;
use crate::middleware::authorize;
use crate::models::{
    CreateDrinkRequest, Drink, DrinkDeletedResponse, DrinkResponse, DrinksResponse,
    UpdateDrinkRequest,
};
use crate::services::DrinkService;
use crate::validators::validation_errors_to_api_error;

fn long_form(drinks: Vec<Drink>) -> HttpResponse {
    HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.into_iter().map(DrinkResponse::long).collect(),
    })
}

/// List drinks with their recipe colors and proportions only
#[utoipa::path(
    get,
    path = "/drinks",
    tag = "Drinks",
    responses(
        (status = 200, description = "Short form of every drink", body = DrinksResponse)
    )
)]
pub async fn get_drinks(drink_service: web::Data<DrinkService>) -> Result<HttpResponse, ApiError> {
    let drinks = drink_service.list_drinks().await?;

    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.into_iter().map(DrinkResponse::short).collect(),
    }))
}

/// List drinks with full recipes
#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = "Drinks",
    responses(
        (status = 200, description = "Long form of every drink", body = DrinksResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Missing get:drinks-detail", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_drinks_detail(
    drink_service: web::Data<DrinkService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, PERM_GET_DRINKS_DETAIL)?;
    debug!("Detailed drink listing for {}", claims.sub);

    Ok(long_form(drink_service.list_drinks().await?))
}

/// Add a drink to the catalog
#[utoipa::path(
    post,
    path = "/drinks",
    tag = "Drinks",
    request_body = CreateDrinkRequest,
    responses(
        (status = 200, description = "Drink created", body = DrinksResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Missing post:drinks", body = crate::errors::ErrorResponse),
        (status = 422, description = "Missing field or title already used", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_drink(
    drink_service: web::Data<DrinkService>,
    req: HttpRequest,
    body: web::Json<CreateDrinkRequest>,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, PERM_POST_DRINKS)?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let drink = drink_service.create_drink(body.into_inner()).await?;
    info!("Drink {} created by {}", drink.id, claims.sub);

    Ok(long_form(vec![drink]))
}

/// Change the title or recipe of a drink
#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    tag = "Drinks",
    params(
        ("id" = i64, Path, description = "Drink ID")
    ),
    request_body = UpdateDrinkRequest,
    responses(
        (status = 200, description = "Drink updated", body = DrinksResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Missing patch:drinks", body = crate::errors::ErrorResponse),
        (status = 404, description = "Drink not found", body = crate::errors::ErrorResponse),
        (status = 422, description = "Title already used", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_drink(
    drink_service: web::Data<DrinkService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateDrinkRequest>,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, PERM_PATCH_DRINKS)?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let drink_id = path.into_inner();
    let drink = drink_service
        .update_drink(drink_id, body.into_inner())
        .await?;
    info!("Drink {} updated by {}", drink_id, claims.sub);

    Ok(long_form(vec![drink]))
}

/// Remove a drink from the catalog
#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    tag = "Drinks",
    params(
        ("id" = i64, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "Drink deleted", body = DrinkDeletedResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Missing delete:drinks", body = crate::errors::ErrorResponse),
        (status = 404, description = "Drink not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_drink(
    drink_service: web::Data<DrinkService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, PERM_DELETE_DRINKS)?;

    let drink_id = path.into_inner();
    drink_service.delete_drink(drink_id).await?;
    info!("Drink {} deleted by {}", drink_id, claims.sub);

    Ok(HttpResponse::Ok().json(DrinkDeletedResponse {
        success: true,
        delete: drink_id,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::constants::{
        PERM_DELETE_DRINKS, PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS, PERM_POST_DRINKS,
    };
    use crate::test_helpers::{bearer, init_app, seeded_repositories, token_with};

    fn mocha() -> Value {
        json!({
            "title": "mocha",
            "recipe": [
                {"name": "espresso", "color": "brown", "parts": 1},
                {"name": "chocolate", "color": "darkbrown", "parts": 1},
                {"name": "milk", "color": "white", "parts": 2}
            ]
        })
    }

    #[actix_web::test]
    async fn test_public_listing_is_short_form() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);

        let req = test::TestRequest::get().uri("/drinks").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["drinks"][0]["title"], "water");
        assert_eq!(body["drinks"][0]["recipe"][0]["color"], "blue");
        assert!(body["drinks"][0]["recipe"][0].get("name").is_none());
    }

    #[actix_web::test]
    async fn test_detail_requires_permission() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);

        let req = test::TestRequest::get().uri("/drinks-detail").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "AUTHORIZATION_HEADER_MISSING");

        let req = test::TestRequest::get()
            .uri("/drinks-detail")
            .insert_header(bearer(&token_with(&[PERM_POST_DRINKS])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/drinks-detail")
            .insert_header(bearer(&token_with(&[PERM_GET_DRINKS_DETAIL])))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drinks"][0]["recipe"][0]["name"], "water");
    }

    #[actix_web::test]
    async fn test_create_update_delete_drink() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);

        let req = test::TestRequest::post()
            .uri("/drinks")
            .insert_header(bearer(&token_with(&[PERM_POST_DRINKS])))
            .set_json(mocha())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drinks"][0]["title"], "mocha");
        assert_eq!(body["drinks"][0]["recipe"].as_array().unwrap().len(), 3);
        let id = body["drinks"][0]["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/drinks/{}", id))
            .insert_header(bearer(&token_with(&[PERM_PATCH_DRINKS])))
            .set_json(json!({
                "title": "white mocha",
                "recipe": {"name": "white chocolate", "color": "ivory", "parts": 2}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["drinks"][0]["title"], "white mocha");
        assert_eq!(body["drinks"][0]["recipe"][0]["name"], "white chocolate");

        let req = test::TestRequest::delete()
            .uri(&format!("/drinks/{}", id))
            .insert_header(bearer(&token_with(&[PERM_DELETE_DRINKS])))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["delete"], id);

        let req = test::TestRequest::delete()
            .uri(&format!("/drinks/{}", id))
            .insert_header(bearer(&token_with(&[PERM_DELETE_DRINKS])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_rejections() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);
        let token = token_with(&[PERM_POST_DRINKS]);

        let cases = [
            (json!({"title": "latte"}), StatusCode::UNPROCESSABLE_ENTITY),
            (
                json!({"title": "water", "recipe": {"name": "water", "color": "blue", "parts": 1}}),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                json!({"title": "   ", "recipe": {"name": "milk", "color": "white", "parts": 1}}),
                StatusCode::BAD_REQUEST,
            ),
            (json!({"title": "air", "recipe": []}), StatusCode::BAD_REQUEST),
        ];

        for (payload, status) in cases {
            let req = test::TestRequest::post()
                .uri("/drinks")
                .insert_header(bearer(&token))
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status, "payload: {}", payload);
        }
        assert_eq!(repositories.drinks.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_mutations_check_their_own_scope() {
        let repositories = seeded_repositories().await;
        let app = init_app!(repositories);
        let token = token_with(&[PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS]);

        let req = test::TestRequest::post()
            .uri("/drinks")
            .insert_header(bearer(&token))
            .set_json(mocha())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::delete()
            .uri("/drinks/1")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::patch()
            .uri("/drinks/99")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "tea"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
