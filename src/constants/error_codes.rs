//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";
pub const CODE_INVALID_QUERY: &str = "INVALID_QUERY";

// Authentication errors
pub const CODE_AUTH_HEADER_MISSING: &str = "AUTHORIZATION_HEADER_MISSING";
pub const CODE_INVALID_HEADER: &str = "INVALID_HEADER";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";
pub const CODE_TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";

// Authorization errors
pub const CODE_PERMISSION_DENIED: &str = "PERMISSION_DENIED";

// Trivia errors
pub const CODE_PAGE_OUT_OF_RANGE: &str = "PAGE_OUT_OF_RANGE";
pub const CODE_QUESTION_NOT_FOUND: &str = "QUESTION_NOT_FOUND";
pub const CODE_CATEGORY_NOT_FOUND: &str = "CATEGORY_NOT_FOUND";
pub const CODE_UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
pub const CODE_QUIZ_EXHAUSTED: &str = "QUIZ_EXHAUSTED";

// Drink errors
pub const CODE_DRINK_NOT_FOUND: &str = "DRINK_NOT_FOUND";
pub const CODE_DRINK_INCOMPLETE: &str = "DRINK_INCOMPLETE";
pub const CODE_DRINK_TITLE_EXISTS: &str = "DRINK_TITLE_EXISTS";

// Generic errors
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
