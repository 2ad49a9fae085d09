//! Pagination constants for list endpoints.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
