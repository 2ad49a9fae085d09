//! Trivia question handlers for listing, creation, deletion and search.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::DEFAULT_PAGE_NUMBER;
use crate::errors::ApiError;
use crate::models::{
    CreateQuestionRequest, PageQuery, QuestionCreatedResponse, QuestionDeletedResponse,
    QuestionPageResponse, SearchQuestionsRequest, SearchQuestionsResponse,
};
use crate::services::TriviaService;
use crate::validators::validation_errors_to_api_error;

/// List questions ten at a time, ordered by id
#[utoipa::path(
    get,
    path = "/api/questions",
    tag = "Questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 404, description = "Page out of range", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_questions(
    trivia_service: web::Data<TriviaService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER);
    debug!("Listing questions, page {}", page);

    let questions = trivia_service.list_questions(page).await?;
    let categories = trivia_service.list_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionPageResponse {
        success: true,
        questions: questions.questions,
        total_questions: questions.total,
        categories,
        current_category: None,
    }))
}

/// Create a new question
#[utoipa::path(
    post,
    path = "/api/questions",
    tag = "Questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = QuestionCreatedResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 422, description = "Unknown category", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_question(
    trivia_service: web::Data<TriviaService>,
    body: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let question = trivia_service.create_question(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(QuestionCreatedResponse {
        success: true,
        added: question.id,
    }))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = "Questions",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionDeletedResponse),
        (status = 404, description = "Question not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_question(
    trivia_service: web::Data<TriviaService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();
    trivia_service.delete_question(question_id).await?;

    Ok(HttpResponse::Ok().json(QuestionDeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Search question text, ignoring case; results are not paged
#[utoipa::path(
    post,
    path = "/api/questions/search",
    tag = "Questions",
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Every matching question", body = SearchQuestionsResponse),
        (status = 400, description = "Malformed body", body = crate::errors::ErrorResponse)
    )
)]
pub async fn search_questions(
    trivia_service: web::Data<TriviaService>,
    body: web::Json<SearchQuestionsRequest>,
) -> Result<HttpResponse, ApiError> {
    let questions = trivia_service.search_questions(&body.search_term).await?;
    info!("Returning {} search results", questions.len());

    Ok(HttpResponse::Ok().json(SearchQuestionsResponse {
        success: true,
        total_questions: questions.len() as u64,
        questions,
        current_category: None,
    }))
}
