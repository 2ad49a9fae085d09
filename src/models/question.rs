use serde::{Deserialize, Serialize};

/// Trivia question stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Id of the owning [`Category`](super::Category)
    pub category: i64,
    pub difficulty: i32,
}

/// A question that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
