//! Shared types for the Bistro API
//!
//! Error codes, the JSON error body, and the models exchanged between the
//! server and its web client.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
