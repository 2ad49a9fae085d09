//! Drink service for the coffee shop catalog.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{
    CODE_DRINK_INCOMPLETE, CODE_DRINK_NOT_FOUND, CODE_DRINK_TITLE_EXISTS, ERR_DRINK_INCOMPLETE,
    ERR_DRINK_NOT_FOUND, ERR_DRINK_TITLE_EXISTS,
};
use crate::errors::ApiError;
use crate::models::{CreateDrinkRequest, Drink, NewDrink, RecipePart, UpdateDrinkRequest};
use crate::repositories::{DrinkRepository, Repositories};
use crate::validators::validate_recipe;

pub struct DrinkService {
    drinks: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            drinks: Arc::clone(&repositories.drinks),
        }
    }

    pub async fn list_drinks(&self) -> Result<Vec<Drink>, ApiError> {
        let drinks = self.drinks.find_all().await?;
        debug!("Fetched {} drinks", drinks.len());
        Ok(drinks)
    }

    pub async fn create_drink(&self, req: CreateDrinkRequest) -> Result<Drink, ApiError> {
        let (title, recipe) = match (req.title, req.recipe) {
            (Some(title), Some(recipe)) => (title.trim().to_string(), Vec::from(recipe)),
            _ => {
                warn!("Create drink failed: title or recipe missing");
                return Err(ApiError::unprocessable(
                    CODE_DRINK_INCOMPLETE,
                    ERR_DRINK_INCOMPLETE,
                ));
            }
        };
        validate_recipe(&recipe)?;
        self.ensure_title_free(&title, None).await?;

        let drink = self.drinks.insert(NewDrink { title, recipe }).await?;
        info!("Created drink {} '{}'", drink.id, drink.title);
        Ok(drink)
    }

    /// Apply the fields present in `req` to an existing drink.
    pub async fn update_drink(&self, id: i64, req: UpdateDrinkRequest) -> Result<Drink, ApiError> {
        let mut drink = self.require_drink(id).await?;

        if let Some(recipe) = req.recipe {
            let recipe: Vec<RecipePart> = recipe.into();
            validate_recipe(&recipe)?;
            drink.recipe = recipe;
        }
        if let Some(title) = req.title {
            let title = title.trim().to_string();
            if title != drink.title {
                self.ensure_title_free(&title, Some(id)).await?;
                drink.title = title;
            }
        }

        if !self.drinks.update(&drink).await? {
            // Deleted between the read and the write.
            return Err(ApiError::not_found(CODE_DRINK_NOT_FOUND, ERR_DRINK_NOT_FOUND));
        }
        info!("Updated drink {}", id);
        Ok(drink)
    }

    pub async fn delete_drink(&self, id: i64) -> Result<(), ApiError> {
        if !self.drinks.delete(id).await? {
            warn!("Delete failed: Drink not found with id: {}", id);
            return Err(ApiError::not_found(CODE_DRINK_NOT_FOUND, ERR_DRINK_NOT_FOUND));
        }
        info!("Deleted drink {}", id);
        Ok(())
    }

    async fn require_drink(&self, id: i64) -> Result<Drink, ApiError> {
        self.drinks.find_by_id(id).await?.ok_or_else(|| {
            warn!("Drink not found with id: {}", id);
            ApiError::not_found(CODE_DRINK_NOT_FOUND, ERR_DRINK_NOT_FOUND)
        })
    }

    async fn ensure_title_free(&self, title: &str, except_id: Option<i64>) -> Result<(), ApiError> {
        match self.drinks.find_by_title(title).await? {
            Some(other) if Some(other.id) != except_id => {
                warn!("Drink title '{}' already used by drink {}", title, other.id);
                Err(ApiError::unprocessable(
                    CODE_DRINK_TITLE_EXISTS,
                    ERR_DRINK_TITLE_EXISTS,
                ))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeInput;
    use crate::test_helpers::seeded_repositories;

    fn latte() -> RecipeInput {
        RecipeInput::Many(vec![
            RecipePart {
                color: "brown".to_string(),
                name: "espresso".to_string(),
                parts: 1,
            },
            RecipePart {
                color: "white".to_string(),
                name: "milk".to_string(),
                parts: 3,
            },
        ])
    }

    #[tokio::test]
    async fn test_create_requires_title_and_recipe() {
        let service = DrinkService::new(&seeded_repositories().await);
        let err = service
            .create_drink(CreateDrinkRequest {
                title: Some("latte".to_string()),
                recipe: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_DRINK_INCOMPLETE);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_title() {
        let service = DrinkService::new(&seeded_repositories().await);
        let err = service
            .create_drink(CreateDrinkRequest {
                title: Some(" water ".to_string()),
                recipe: Some(latte()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_DRINK_TITLE_EXISTS);
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let service = DrinkService::new(&seeded_repositories().await);
        let created = service
            .create_drink(CreateDrinkRequest {
                title: Some("latte".to_string()),
                recipe: Some(latte()),
            })
            .await
            .unwrap();

        let updated = service
            .update_drink(
                created.id,
                UpdateDrinkRequest {
                    title: Some("flat white".to_string()),
                    recipe: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "flat white");
        assert_eq!(updated.recipe, created.recipe);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_drink() {
        let service = DrinkService::new(&seeded_repositories().await);
        let err = service
            .update_drink(
                99,
                UpdateDrinkRequest {
                    title: None,
                    recipe: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_DRINK_NOT_FOUND);
        assert!(service.delete_drink(99).await.is_err());
    }
}
