//! MongoDB repository for the drink catalog.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::error::{Error, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{CODE_DRINK_TITLE_EXISTS, COLLECTION_DRINKS, ERR_DRINK_TITLE_EXISTS};
use crate::errors::ApiError;
use crate::models::{Drink, NewDrink};

use super::counters::IdSequence;
use super::DrinkRepository;

const DUPLICATE_KEY: i32 = 11000;

pub struct MongoDrinkRepository {
    collection: Collection<Drink>,
    ids: IdSequence,
}

impl MongoDrinkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_DRINKS),
            ids: IdSequence::new(db, COLLECTION_DRINKS),
        }
    }

    /// Create the unique index on `title`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for drinks collection...");
        let index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

/// Map a unique-index violation on `title` to the catalog's duplicate error.
fn map_write_error(err: Error) -> ApiError {
    let duplicate = matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    );
    if duplicate {
        ApiError::unprocessable(CODE_DRINK_TITLE_EXISTS, ERR_DRINK_TITLE_EXISTS)
    } else {
        err.into()
    }
}

#[async_trait]
impl DrinkRepository for MongoDrinkRepository {
    async fn find_all(&self) -> Result<Vec<Drink>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Drink>, ApiError> {
        debug!("Repository: Finding drink by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Drink>, ApiError> {
        Ok(self.collection.find_one(doc! { "title": title }).await?)
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, ApiError> {
        let drink = drink.with_id(self.ids.next().await?);
        self.collection
            .insert_one(&drink)
            .await
            .map_err(map_write_error)?;
        Ok(drink)
    }

    async fn update(&self, drink: &Drink) -> Result<bool, ApiError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": drink.id }, drink)
            .await
            .map_err(map_write_error)?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
