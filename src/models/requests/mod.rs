//! Request models for API endpoints.

pub mod drink;
pub mod question;
pub mod quiz;

pub use drink::*;
pub use question::*;
pub use quiz::*;
