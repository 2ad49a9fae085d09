//! HTTP request handlers organized by domain.

pub mod category_handler;
pub mod drink_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

pub use category_handler::*;
pub use drink_handler::*;
pub use health_handler::*;
pub use question_handler::*;
pub use quiz_handler::*;
