use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ingredient of a drink recipe
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct RecipePart {
    /// Display color of the ingredient
    #[schema(example = "blue")]
    pub color: String,
    /// Ingredient name
    #[schema(example = "water")]
    pub name: String,
    /// Relative amount of the ingredient
    #[schema(example = 1)]
    pub parts: u32,
}

/// Drink document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Drink {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub recipe: Vec<RecipePart>,
}

/// A drink that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

impl NewDrink {
    pub fn with_id(self, id: i64) -> Drink {
        Drink {
            id,
            title: self.title,
            recipe: self.recipe,
        }
    }
}

/// Drink seeded into an empty catalog.
pub fn default_drink() -> NewDrink {
    NewDrink {
        title: "water".to_string(),
        recipe: vec![RecipePart {
            color: "blue".to_string(),
            name: "water".to_string(),
            parts: 1,
        }],
    }
}
