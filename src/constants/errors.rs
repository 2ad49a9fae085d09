//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_HEADER_MISSING: &str = "Authorization header is expected";
pub const ERR_INVALID_HEADER: &str = "Authorization header must be a bearer token";
pub const ERR_INVALID_TOKEN: &str = "Unable to verify the bearer token";
pub const ERR_TOKEN_EXPIRED: &str = "Token expired";
pub const ERR_PERMISSION_DENIED: &str = "Permission not found in token";

// Trivia errors
pub const ERR_PAGE_OUT_OF_RANGE: &str = "No questions exist on the requested page";
pub const ERR_QUESTION_NOT_FOUND: &str = "Question not found";
pub const ERR_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const ERR_UNKNOWN_CATEGORY: &str = "Question refers to a category that does not exist";
pub const ERR_QUIZ_EXHAUSTED: &str = "No questions left in this category";
pub const ERR_BLANK_QUESTION: &str = "Question text must not be blank";
pub const ERR_BLANK_ANSWER: &str = "Answer must not be blank";
pub const ERR_DIFFICULTY_RANGE: &str = "Difficulty must be between 1 and 5";

// Drink errors
pub const ERR_DRINK_NOT_FOUND: &str = "Drink not found";
pub const ERR_DRINK_INCOMPLETE: &str = "A drink requires both a title and a recipe";
pub const ERR_DRINK_TITLE_EXISTS: &str = "A drink with this title already exists";
pub const ERR_BLANK_TITLE: &str = "Title must not be blank";
pub const ERR_EMPTY_RECIPE: &str = "Recipe must contain at least one ingredient";
pub const ERR_BLANK_INGREDIENT: &str = "Every ingredient needs a name and a color";
pub const ERR_ZERO_PARTS: &str = "Every ingredient needs at least one part";

// Generic errors
pub const ERR_RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const ERR_FAILED_ALLOCATE_ID: &str = "Failed to allocate a record id";
