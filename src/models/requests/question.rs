//! Trivia question request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::NewQuestion;
use crate::validators::{validate_answer_text, validate_question_text};

/// Query parameters for paged question listings
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (default: 1)
    pub page: Option<u64>,
}

/// Request payload for creating a question
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    /// Question text
    #[validate(custom(function = "validate_question_text"))]
    #[schema(example = "Who invented Peanut Butter?")]
    pub question: String,
    /// Expected answer
    #[validate(custom(function = "validate_answer_text"))]
    #[schema(example = "George Washington Carver")]
    pub answer: String,
    /// Category id, as a number or numeric string
    #[serde(deserialize_with = "crate::models::flexible_id::deserialize")]
    #[schema(value_type = i64, example = 4)]
    pub category: i64,
    /// Difficulty from 1 to 5
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    #[schema(example = 2)]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question.trim().to_string(),
            answer: req.answer.trim().to_string(),
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// Request payload for searching questions
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Case-insensitive substring of the question text
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: String,
}
