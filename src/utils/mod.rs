//! Shared helpers that carry no HTTP or storage concerns.

pub mod log_sanitizer;
pub mod pagination;

pub use log_sanitizer::*;
pub use pagination::*;
