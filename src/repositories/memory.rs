//! In-memory repositories.
//!
//! Used with `STORAGE_BACKEND=memory` and by the test suite. Each table is a
//! `BTreeMap` keyed by id, so iteration order is id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::constants::{CODE_DRINK_TITLE_EXISTS, ERR_DRINK_TITLE_EXISTS};
use crate::errors::ApiError;
use crate::models::{Category, Drink, NewDrink, NewQuestion, Question};
use crate::utils::{filter_by_key, filter_by_text};

use super::{CategoryRepository, DrinkRepository, QuestionRepository};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

pub struct InMemoryQuestionRepository {
    table: RwLock<Table<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, ApiError> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, ApiError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, ApiError> {
        let all = self.table.read().await.all();
        Ok(filter_by_key(all, &category_id, |q| q.category))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, ApiError> {
        let all = self.table.read().await.all();
        Ok(filter_by_text(all, term, |q| q.question.as_str()))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, ApiError> {
        let mut table = self.table.write().await;
        let question = question.with_id(table.next_id());
        table.rows.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

pub struct InMemoryCategoryRepository {
    table: RwLock<Table<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, ApiError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, kind: &str) -> Result<Category, ApiError> {
        let mut table = self.table.write().await;
        let category = Category {
            id: table.next_id(),
            kind: kind.to_string(),
        };
        table.rows.insert(category.id, category.clone());
        Ok(category)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}

pub struct InMemoryDrinkRepository {
    table: RwLock<Table<Drink>>,
}

impl InMemoryDrinkRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryDrinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Titles are unique across the catalog, ignoring the drink being replaced.
fn title_taken(table: &Table<Drink>, title: &str, except_id: Option<i64>) -> bool {
    table
        .rows
        .values()
        .any(|d| d.title == title && Some(d.id) != except_id)
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn find_all(&self) -> Result<Vec<Drink>, ApiError> {
        Ok(self.table.read().await.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Drink>, ApiError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Drink>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|d| d.title == title).cloned())
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, ApiError> {
        let mut table = self.table.write().await;
        if title_taken(&table, &drink.title, None) {
            return Err(ApiError::unprocessable(
                CODE_DRINK_TITLE_EXISTS,
                ERR_DRINK_TITLE_EXISTS,
            ));
        }
        let drink = drink.with_id(table.next_id());
        table.rows.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: &Drink) -> Result<bool, ApiError> {
        let mut table = self.table.write().await;
        if title_taken(&table, &drink.title, Some(drink.id)) {
            return Err(ApiError::unprocessable(
                CODE_DRINK_TITLE_EXISTS,
                ERR_DRINK_TITLE_EXISTS,
            ));
        }
        match table.rows.get_mut(&drink.id) {
            Some(stored) => {
                *stored = drink.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_drink, RecipePart};

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn test_questions_are_ordered_and_filtered() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(new_question("Who invented X?", 1)).await.unwrap();
        repo.insert(new_question("What is Y?", 2)).await.unwrap();
        repo.insert(new_question("Who discovered Z?", 2)).await.unwrap();

        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let in_two: Vec<i64> = repo
            .find_by_category(2)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(in_two, vec![2, 3]);

        let found: Vec<i64> = repo.search("WHO").await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = InMemoryQuestionRepository::new();
        let first = repo.insert(new_question("a", 1)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let second = repo.insert(new_question("b", 1)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_drink_titles_are_unique() {
        let repo = InMemoryDrinkRepository::new();
        let water = repo.insert(default_drink()).await.unwrap();
        assert!(repo.insert(default_drink()).await.is_err());

        let mut coffee = repo
            .insert(NewDrink {
                title: "coffee".to_string(),
                recipe: vec![RecipePart {
                    color: "brown".to_string(),
                    name: "coffee".to_string(),
                    parts: 1,
                }],
            })
            .await
            .unwrap();

        coffee.title = water.title.clone();
        assert!(repo.update(&coffee).await.is_err());

        // Re-saving under its own title is fine.
        assert!(repo.update(&water).await.unwrap());
    }
}
