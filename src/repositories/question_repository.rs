//! MongoDB repository for trivia questions.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document, Regex};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_QUESTIONS;
use crate::errors::ApiError;
use crate::models::{NewQuestion, Question};

use super::counters::IdSequence;
use super::QuestionRepository;

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
    ids: IdSequence,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_QUESTIONS),
            ids: IdSequence::new(db, COLLECTION_QUESTIONS),
        }
    }

    /// Index the category reference used by the per-category listing.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for questions collection...");
        self.collection
            .create_index(IndexModel::builder().keys(doc! { "category": 1 }).build())
            .await?;
        Ok(())
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Question>, ApiError> {
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, ApiError> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ApiError> {
        debug!("Repository: Finding question by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, ApiError> {
        debug!("Repository: Finding questions in category: {}", category_id);
        self.find_sorted(doc! { "category": category_id }).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, ApiError> {
        let term = term.trim();
        if term.is_empty() {
            return self.find_all().await;
        }

        let pattern = Regex {
            pattern: regex::escape(term),
            options: "i".to_string(),
        };
        debug!("Repository: Searching questions for: {}", term);
        self.find_sorted(doc! { "question": { "$regex": pattern } })
            .await
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, ApiError> {
        let question = question.with_id(self.ids.next().await?);
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
