//! Trivia response models.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Question};

/// Categories keyed by their id, rendered as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<String, String>;

/// Build the id-keyed category map returned by several endpoints.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.kind.clone()))
        .collect()
}

/// Question data returned in API responses
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 5)]
    pub id: i64,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    #[schema(example = 4)]
    pub category: i64,
    #[schema(example = 2)]
    pub difficulty: i32,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Category data returned in API responses
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = 3)]
    pub id: i64,
    #[serde(rename = "type")]
    #[schema(example = "Geography")]
    pub kind: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// All categories
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// One page of questions
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    /// Number of questions across all pages
    pub total_questions: u64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null for the unfiltered listing
    pub current_category: Option<i64>,
}

/// Questions of one category, one page at a time
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    /// Number of questions in the category across all pages
    pub total_questions: u64,
    pub current_category: i64,
    pub category: CategoryResponse,
}

/// Unpaged search results
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: u64,
    pub current_category: Option<i64>,
}

/// Result of creating a question
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    /// Id of the new question
    #[schema(example = 24)]
    pub added: i64,
}

/// Result of deleting a question
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    /// Id of the removed question
    #[schema(example = 24)]
    pub deleted: i64,
}

/// Next quiz question
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionResponse,
}
