//! Repository layer for storage operations.
//!
//! Services talk to the traits below; every method returns fully materialized
//! records so nothing downstream triggers further I/O. Two backends exist:
//! MongoDB for deployments and an in-memory store for development and tests.

pub mod category_repository;
pub mod counters;
pub mod drink_repository;
pub mod memory;
pub mod question_repository;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use mongodb::Database;

use crate::errors::ApiError;
use crate::models::{Category, Drink, NewDrink, NewQuestion, Question};

pub use category_repository::MongoCategoryRepository;
pub use drink_repository::MongoDrinkRepository;
pub use memory::{InMemoryCategoryRepository, InMemoryDrinkRepository, InMemoryQuestionRepository};
pub use question_repository::MongoQuestionRepository;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every question, ordered by id.
    async fn find_all(&self) -> Result<Vec<Question>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ApiError>;

    /// Questions of one category, ordered by id.
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, ApiError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search(&self, term: &str) -> Result<Vec<Question>, ApiError>;

    async fn insert(&self, question: NewQuestion) -> Result<Question, ApiError>;

    /// Returns false when no question had that id.
    async fn delete(&self, id: i64) -> Result<bool, ApiError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by id.
    async fn find_all(&self) -> Result<Vec<Category>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, ApiError>;

    async fn insert(&self, kind: &str) -> Result<Category, ApiError>;

    async fn count(&self) -> Result<u64, ApiError>;
}

#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// Every drink, ordered by id.
    async fn find_all(&self) -> Result<Vec<Drink>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Drink>, ApiError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Drink>, ApiError>;

    /// Fails with an unprocessable error when the title is already taken.
    async fn insert(&self, drink: NewDrink) -> Result<Drink, ApiError>;

    /// Replace a stored drink; returns false when no drink had that id.
    async fn update(&self, drink: &Drink) -> Result<bool, ApiError>;

    /// Returns false when no drink had that id.
    async fn delete(&self, id: i64) -> Result<bool, ApiError>;

    async fn count(&self) -> Result<u64, ApiError>;
}

/// The repositories a running server needs, behind shared trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub drinks: Arc<dyn DrinkRepository>,
}

impl Repositories {
    /// MongoDB-backed repositories with their indexes in place.
    pub async fn mongodb(db: &Database) -> Result<Self, ApiError> {
        let questions = MongoQuestionRepository::new(db);
        let drinks = MongoDrinkRepository::new(db);

        questions.create_indexes().await?;
        drinks.create_indexes().await?;

        Ok(Self {
            questions: Arc::new(questions),
            categories: Arc::new(MongoCategoryRepository::new(db)),
            drinks: Arc::new(drinks),
        })
    }

    /// Empty in-memory repositories.
    pub fn in_memory() -> Self {
        info!("Using in-memory storage; data will not survive a restart");
        Self {
            questions: Arc::new(InMemoryQuestionRepository::new()),
            categories: Arc::new(InMemoryCategoryRepository::new()),
            drinks: Arc::new(InMemoryDrinkRepository::new()),
        }
    }
}
