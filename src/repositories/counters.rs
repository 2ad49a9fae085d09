//! Integer id sequences kept in the `counters` collection.

use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::constants::{COLLECTION_COUNTERS, ERR_FAILED_ALLOCATE_ID};
use crate::errors::ApiError;

/// Hands out increasing ids for one collection, starting at 1.
pub struct IdSequence {
    counters: Collection<Document>,
    name: &'static str,
}

impl IdSequence {
    pub fn new(db: &Database, name: &'static str) -> Self {
        Self {
            counters: db.collection(COLLECTION_COUNTERS),
            name,
        }
    }

    /// Atomically increment the sequence and return the new value.
    pub async fn next(&self) -> Result<i64, ApiError> {
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": self.name }, doc! { "$inc": { "seq": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ApiError::internal(ERR_FAILED_ALLOCATE_ID))?;

        counter
            .get_i64("seq")
            .map_err(|e| ApiError::internal(format!("{}: {}", ERR_FAILED_ALLOCATE_ID, e)))
    }
}
