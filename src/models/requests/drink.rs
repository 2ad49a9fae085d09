//! Drink request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::RecipePart;
use crate::validators::validate_drink_title;

/// A recipe given either as a single ingredient or as a list
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<RecipePart>),
    One(RecipePart),
}

impl From<RecipeInput> for Vec<RecipePart> {
    fn from(input: RecipeInput) -> Self {
        match input {
            RecipeInput::Many(parts) => parts,
            RecipeInput::One(part) => vec![part],
        }
    }
}

/// Request payload for creating a drink
///
/// Both fields are required; they are optional here so that a missing
/// field is reported as unprocessable rather than as malformed JSON.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDrinkRequest {
    /// Unique drink title
    #[validate(
        length(max = 80, message = "Title must be at most 80 characters"),
        custom(function = "validate_drink_title")
    )]
    #[schema(example = "matcha shake")]
    pub title: Option<String>,
    /// Recipe ingredients
    pub recipe: Option<RecipeInput>,
}

/// Request payload for updating a drink; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDrinkRequest {
    /// New drink title
    #[validate(
        length(max = 80, message = "Title must be at most 80 characters"),
        custom(function = "validate_drink_title")
    )]
    #[schema(example = "matcha latte")]
    pub title: Option<String>,
    /// Replacement recipe
    pub recipe: Option<RecipeInput>,
}
