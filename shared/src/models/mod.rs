//! Data models
//!
//! Shared between the server and the web client (via API). Field names are
//! camelCase on the wire and in the document store alike; every id is the
//! string key of its SurrealDB record.

pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod stats;
pub mod user;
pub mod write_result;

// Re-exports
pub use cart::*;
pub use menu::*;
pub use payment::*;
pub use review::*;
pub use stats::*;
pub use user::*;
pub use write_result::*;
