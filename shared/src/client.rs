//! Client-related types shared between server and client
//!
//! Request/response bodies of the auth handshake and checkout calls.

use serde::{Deserialize, Serialize};

use crate::models::{DeleteResult, InsertResult};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Issue-token request
///
/// Sent by the web client right after its identity provider signs the user
/// in. Extra profile fields the client sends along are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// Issue-token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Admin-status query response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// Registration response when the email is already known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlreadyRegistered {
    pub message: String,
}

impl Default for AlreadyRegistered {
    fn default() -> Self {
        Self {
            message: "user already exists".to_string(),
        }
    }
}

// =============================================================================
// Payment API DTOs
// =============================================================================

/// Create-payment-intent request (price in major currency units)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

/// Create-payment-intent response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Record-payment response: payment insert and cart cleanup results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub result: InsertResult,
    pub delete_result: DeleteResult,
}
