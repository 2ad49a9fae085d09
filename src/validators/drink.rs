//! Drink validators.

use validator::ValidationError;

use crate::constants::{
    CODE_VALIDATION_FAILED, ERR_BLANK_INGREDIENT, ERR_BLANK_TITLE, ERR_EMPTY_RECIPE,
    ERR_ZERO_PARTS,
};
use crate::errors::ApiError;
use crate::models::RecipePart;

use super::require_text;

/// Drink titles must contain something other than whitespace.
pub fn validate_drink_title(title: &str) -> Result<(), ValidationError> {
    require_text(title, ERR_BLANK_TITLE)
}

/// Validate a recipe: at least one ingredient, each named, colored and non-zero.
pub fn validate_recipe(recipe: &[RecipePart]) -> Result<(), ApiError> {
    let mut errors = Vec::new();

    if recipe.is_empty() {
        errors.push(ERR_EMPTY_RECIPE.to_string());
    }
    if recipe
        .iter()
        .any(|p| p.name.trim().is_empty() || p.color.trim().is_empty())
    {
        errors.push(ERR_BLANK_INGREDIENT.to_string());
    }
    if recipe.iter().any(|p| p.parts == 0) {
        errors.push(ERR_ZERO_PARTS.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        })
    }
}
