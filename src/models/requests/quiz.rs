//! Quiz request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Category selection for a quiz round
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category name as shown by the client
    #[serde(rename = "type", default)]
    #[schema(example = "Geography")]
    pub kind: Option<String>,
    /// Category id; 0 selects every category
    #[serde(deserialize_with = "crate::models::flexible_id::deserialize")]
    #[schema(value_type = i64, example = 3)]
    pub id: i64,
}

impl QuizCategory {
    /// `None` when every category is in play.
    pub fn category_id(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }
}

/// Request payload for fetching the next quiz question
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already asked in this round
    #[serde(default)]
    #[schema(example = json!([13, 14]))]
    pub previous_questions: Vec<i64>,
    /// Category to draw from; omitted means all categories
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}
