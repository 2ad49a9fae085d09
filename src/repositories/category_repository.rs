//! MongoDB repository for trivia categories.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_CATEGORIES;
use crate::errors::ApiError;
use crate::models::Category;

use super::counters::IdSequence;
use super::CategoryRepository;

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
    ids: IdSequence,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_CATEGORIES),
            ids: IdSequence::new(db, COLLECTION_CATEGORIES),
        }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, ApiError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, kind: &str) -> Result<Category, ApiError> {
        let category = Category {
            id: self.ids.next().await?,
            kind: kind.to_string(),
        };
        self.collection.insert_one(&category).await?;
        Ok(category)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
