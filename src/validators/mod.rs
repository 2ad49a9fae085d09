//! Request validation helpers and custom field validators.

pub mod common;
pub mod drink;
pub mod question;

pub use common::*;
pub use drink::*;
pub use question::*;
