//! Drink response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Drink, RecipePart};

/// One ingredient as rendered to clients; `name` is omitted in the short form
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct RecipePartResponse {
    #[schema(example = "blue")]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "water")]
    pub name: Option<String>,
    #[schema(example = 1)]
    pub parts: u32,
}

/// Drink data returned in API responses
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct DrinkResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "water")]
    pub title: String,
    pub recipe: Vec<RecipePartResponse>,
}

impl DrinkResponse {
    /// Public view: colors and proportions only.
    pub fn short(drink: Drink) -> Self {
        Self::render(drink, false)
    }

    /// Full recipe including ingredient names.
    pub fn long(drink: Drink) -> Self {
        Self::render(drink, true)
    }

    fn render(drink: Drink, with_names: bool) -> Self {
        Self {
            id: drink.id,
            title: drink.title,
            recipe: drink
                .recipe
                .into_iter()
                .map(|RecipePart { color, name, parts }| RecipePartResponse {
                    color,
                    name: with_names.then_some(name),
                    parts,
                })
                .collect(),
        }
    }
}

/// List of drinks
#[derive(Debug, Serialize, ToSchema)]
pub struct DrinksResponse {
    pub success: bool,
    pub drinks: Vec<DrinkResponse>,
}

/// Result of deleting a drink
#[derive(Debug, Serialize, ToSchema)]
pub struct DrinkDeletedResponse {
    pub success: bool,
    /// Id of the removed drink
    #[schema(example = 1)]
    pub delete: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_drink;

    #[test]
    fn test_short_form_hides_ingredient_names() {
        let json = serde_json::to_value(DrinkResponse::short(default_drink().with_id(1))).unwrap();
        assert_eq!(json["recipe"][0]["color"], "blue");
        assert_eq!(json["recipe"][0]["parts"], 1);
        assert!(json["recipe"][0].get("name").is_none());
    }

    #[test]
    fn test_long_form_keeps_ingredient_names() {
        let json = serde_json::to_value(DrinkResponse::long(default_drink().with_id(1))).unwrap();
        assert_eq!(json["recipe"][0]["name"], "water");
        assert_eq!(json["title"], "water");
    }
}
