//! Trivia category handlers.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::DEFAULT_PAGE_NUMBER;
use crate::errors::ApiError;
use crate::models::{CategoriesResponse, CategoryQuestionsResponse, PageQuery};
use crate::services::TriviaService;

/// List every category as an id-to-name map
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse)
    )
)]
pub async fn get_categories(
    trivia_service: web::Data<TriviaService>,
) -> Result<HttpResponse, ApiError> {
    let categories = trivia_service.list_categories().await?;
    debug!("Returning {} categories", categories.len());

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// List the questions of one category ten at a time
#[utoipa::path(
    get,
    path = "/api/categories/{id}/questions",
    tag = "Categories",
    params(
        ("id" = i64, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found or page out of range", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_category_questions(
    trivia_service: web::Data<TriviaService>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER);

    let (category, questions) = trivia_service
        .questions_in_category(category_id, page)
        .await?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: questions.questions,
        total_questions: questions.total,
        current_category: category.id,
        category: category.into(),
    }))
}
