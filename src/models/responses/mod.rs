//! Response models for API endpoints.

pub mod api;
pub mod drink;
pub mod trivia;

pub use api::*;
pub use drink::*;
pub use trivia::*;
