//! MongoDB collection names.

pub const COLLECTION_QUESTIONS: &str = "questions";
pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_DRINKS: &str = "drinks";

/// Holds one `{ _id: <collection>, seq: <i64> }` document per id sequence.
pub const COLLECTION_COUNTERS: &str = "counters";
