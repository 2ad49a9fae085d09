//! Services organized by domain concern.

pub mod drink_service;
pub mod seed_service;
pub mod trivia_service;

pub use drink_service::DrinkService;
pub use seed_service::seed_defaults;
pub use trivia_service::TriviaService;
