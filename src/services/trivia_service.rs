//! Trivia service for question listing, search, creation, deletion and quizzes.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use rand::seq::IndexedRandom;

use crate::constants::{
    CODE_CATEGORY_NOT_FOUND, CODE_QUESTION_NOT_FOUND, CODE_QUIZ_EXHAUSTED, CODE_UNKNOWN_CATEGORY,
    ERR_CATEGORY_NOT_FOUND, ERR_QUESTION_NOT_FOUND, ERR_QUIZ_EXHAUSTED, ERR_UNKNOWN_CATEGORY,
    QUESTIONS_PER_PAGE,
};
use crate::errors::ApiError;
use crate::models::{
    category_map, Category, CategoryMap, CreateQuestionRequest, Question, QuestionResponse,
};
use crate::repositories::{CategoryRepository, QuestionRepository, Repositories};
use crate::utils::page_of;

/// One page of rendered questions plus the size of the whole candidate set.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<QuestionResponse>,
    pub total: u64,
}

impl QuestionPage {
    fn slice(questions: &[Question], page: u64) -> Result<Self, ApiError> {
        let page = page_of(questions, page, QUESTIONS_PER_PAGE)?;
        Ok(Self {
            questions: page.items.iter().cloned().map(Into::into).collect(),
            total: page.total_count as u64,
        })
    }
}

pub struct TriviaService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl TriviaService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            questions: Arc::clone(&repositories.questions),
            categories: Arc::clone(&repositories.categories),
        }
    }

    pub async fn list_categories(&self) -> Result<CategoryMap, ApiError> {
        let categories = self.categories.find_all().await?;
        Ok(category_map(&categories))
    }

    /// Page through every question in id order.
    pub async fn list_questions(&self, page: u64) -> Result<QuestionPage, ApiError> {
        let questions = self.questions.find_all().await?;
        debug!("Paging {} questions, page {}", questions.len(), page);

        QuestionPage::slice(&questions, page).inspect_err(|_| {
            warn!(
                "Requested question page {} past {} questions",
                page,
                questions.len()
            );
        })
    }

    /// Page through the questions of one category.
    pub async fn questions_in_category(
        &self,
        category_id: i64,
        page: u64,
    ) -> Result<(Category, QuestionPage), ApiError> {
        let category = self.require_category(category_id).await?;
        let questions = self.questions.find_by_category(category_id).await?;
        debug!(
            "Paging {} questions of category {}, page {}",
            questions.len(),
            category_id,
            page
        );

        let page = QuestionPage::slice(&questions, page)?;
        Ok((category, page))
    }

    /// Every question whose text contains `term`, ignoring case. Not paged.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<QuestionResponse>, ApiError> {
        let found = self.questions.search(term).await?;
        info!("Search for '{}' matched {} questions", term.trim(), found.len());
        Ok(found.into_iter().map(Into::into).collect())
    }

    pub async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question, ApiError> {
        if self.categories.find_by_id(req.category).await?.is_none() {
            warn!(
                "Create question failed: category {} does not exist",
                req.category
            );
            return Err(ApiError::unprocessable(
                CODE_UNKNOWN_CATEGORY,
                ERR_UNKNOWN_CATEGORY,
            ));
        }

        let question = self.questions.insert(req.into()).await?;
        info!(
            "Created question {} in category {}",
            question.id, question.category
        );
        Ok(question)
    }

    pub async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        if !self.questions.delete(id).await? {
            warn!("Delete failed: Question not found with id: {}", id);
            return Err(ApiError::not_found(
                CODE_QUESTION_NOT_FOUND,
                ERR_QUESTION_NOT_FOUND,
            ));
        }

        info!("Deleted question {}", id);
        Ok(())
    }

    /// Draw a random question not in `previous`, from one category or from all
    /// of them when `category_id` is `None`.
    pub async fn next_quiz_question(
        &self,
        previous: &[i64],
        category_id: Option<i64>,
    ) -> Result<Question, ApiError> {
        let pool = match category_id {
            Some(id) => {
                self.require_category(id).await?;
                self.questions.find_by_category(id).await?
            }
            None => self.questions.find_all().await?,
        };

        let asked: HashSet<i64> = previous.iter().copied().collect();
        let remaining: Vec<Question> = pool
            .into_iter()
            .filter(|q| !asked.contains(&q.id))
            .collect();
        debug!(
            "Quiz: {} questions remaining after {} asked",
            remaining.len(),
            asked.len()
        );

        remaining
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| ApiError::not_found(CODE_QUIZ_EXHAUSTED, ERR_QUIZ_EXHAUSTED))
    }

    async fn require_category(&self, id: i64) -> Result<Category, ApiError> {
        self.categories.find_by_id(id).await?.ok_or_else(|| {
            warn!("Category not found with id: {}", id);
            ApiError::not_found(CODE_CATEGORY_NOT_FOUND, ERR_CATEGORY_NOT_FOUND)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewQuestion;
    use crate::test_helpers::seeded_repositories;

    async fn service_with_questions(per_category: &[(i64, usize)]) -> TriviaService {
        let repositories = seeded_repositories().await;
        for &(category, count) in per_category {
            for i in 0..count {
                repositories
                    .questions
                    .insert(NewQuestion {
                        question: format!("Question {} of category {}?", i, category),
                        answer: "answer".to_string(),
                        category,
                        difficulty: 1,
                    })
                    .await
                    .unwrap();
            }
        }
        TriviaService::new(&repositories)
    }

    #[tokio::test]
    async fn test_list_questions_pages_of_ten() {
        let service = service_with_questions(&[(1, 12), (2, 7)]).await;

        let first = service.list_questions(1).await.unwrap();
        assert_eq!(first.total, 19);
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.questions[0].id, 1);

        let second = service.list_questions(2).await.unwrap();
        assert_eq!(second.questions.len(), 9);
        assert_eq!(second.questions[0].id, 11);

        let err = service.list_questions(3).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_category_listing_counts_only_that_category() {
        let service = service_with_questions(&[(1, 12), (5, 3)]).await;

        let (category, page) = service.questions_in_category(5, 1).await.unwrap();
        assert_eq!(category.kind, "Entertainment");
        assert_eq!(page.total, 3);
        assert!(page.questions.iter().all(|q| q.category == 5));

        assert!(service.questions_in_category(5, 2).await.is_err());
        assert!(service.questions_in_category(999, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_quiz_skips_previous_questions() {
        let service = service_with_questions(&[(1, 2), (3, 3)]).await;
        // Category 3 holds ids 3, 4 and 5.
        let question = service.next_quiz_question(&[3, 5], Some(3)).await.unwrap();
        assert_eq!(question.id, 4);

        let err = service
            .next_quiz_question(&[3, 4, 5], Some(3))
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_QUIZ_EXHAUSTED);
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let service = service_with_questions(&[(1, 1), (2, 1)]).await;
        let question = service.next_quiz_question(&[1], None).await.unwrap();
        assert_eq!(question.id, 2);
    }

    #[tokio::test]
    async fn test_quiz_unknown_category() {
        let service = service_with_questions(&[(1, 1)]).await;
        let err = service.next_quiz_question(&[], Some(42)).await.unwrap_err();
        assert_eq!(err.code(), CODE_CATEGORY_NOT_FOUND);
    }
}
