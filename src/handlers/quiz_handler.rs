//! Quiz handler.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::ApiError;
use crate::models::{QuizRequest, QuizResponse};
use crate::services::TriviaService;

/// Draw a random question not yet asked in this round
#[utoipa::path(
    post,
    path = "/api/quizzes",
    tag = "Quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question", body = QuizResponse),
        (status = 404, description = "No questions left or unknown category", body = crate::errors::ErrorResponse)
    )
)]
pub async fn play_quiz(
    trivia_service: web::Data<TriviaService>,
    body: web::Json<QuizRequest>,
) -> Result<HttpResponse, ApiError> {
    let category_id = body.quiz_category.as_ref().and_then(|c| c.category_id());
    debug!(
        "Quiz round in category {:?} after {} questions",
        category_id,
        body.previous_questions.len()
    );

    let question = trivia_service
        .next_quiz_question(&body.previous_questions, category_id)
        .await?;
    info!("Quiz drew question {}", question.id);

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}
