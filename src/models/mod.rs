//! Data models organized by type.

pub mod category;
pub mod claims;
pub mod drink;
pub mod flexible_id;
pub mod question;
pub mod requests;
pub mod responses;

pub use category::*;
pub use claims::*;
pub use drink::*;
pub use question::*;
pub use requests::*;
pub use responses::*;
