//! Error types and the JSON error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the error type every handler returns. The `message` is what the
/// client sees for 4xx errors; for system errors it is only logged and the
/// response carries the code's generic text instead.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an unauthorized error (no bearer token)
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid token error
    ///
    /// The detail is kept for logs; clients get the uniform 401 text.
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    /// Create a token expired error
    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    /// Create an admin-required error
    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    /// Create a not-resource-owner error (self-access check failed)
    pub fn not_owner() -> Self {
        Self::new(ErrorCode::NotResourceOwner)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::with_message(
            ErrorCode::AlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Create a payment provider error
    pub fn payment_provider(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PaymentProviderError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Whether this error answers "you may not" (403)
    pub fn is_forbidden(&self) -> bool {
        matches!(self.code.category(), ErrorCategory::Permission)
    }
}

/// JSON body returned for every failed request
///
/// ```json
/// { "error": true, "code": 1001, "message": "unauthorized access" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `true`
    pub error: bool,
    /// Numeric [`ErrorCode`]
    pub code: u16,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        // Auth and system failures never echo the internal detail
        let message = match err.code.category() {
            ErrorCategory::Auth | ErrorCategory::System => err.code.message().to_string(),
            ErrorCategory::Payment if err.code == ErrorCode::PaymentProviderError => {
                err.code.message().to_string()
            }
            _ => err.message.clone(),
        };
        Self {
            error: true,
            code: err.code.code(),
            message,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        match self.code.category() {
            ErrorCategory::System => {
                tracing::error!(
                    code = %self.code,
                    message = %self.message,
                    "System error occurred"
                );
            }
            ErrorCategory::Payment => {
                tracing::warn!(code = %self.code, message = %self.message, "Payment error");
            }
            _ => {}
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(AppError::unauthorized().http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::token_expired().http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::admin_required().http_status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::not_owner().http_status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::payment_provider("card_declined").http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_auth_classification() {
        assert!(!AppError::invalid_token("bad signature").is_forbidden());
        assert!(AppError::admin_required().is_forbidden());
        assert!(AppError::not_owner().is_forbidden());
    }

    #[test]
    fn test_error_body_hides_internal_detail() {
        let body = ErrorBody::from(&AppError::database("connection refused on 10.0.0.7"));
        assert!(body.error);
        assert_eq!(body.code, 9002);
        assert_eq!(body.message, "Database error");

        let body = ErrorBody::from(&AppError::invalid_token("InvalidSignature"));
        assert_eq!(body.message, "unauthorized access");
    }

    #[test]
    fn test_error_body_keeps_client_message() {
        let body = ErrorBody::from(&AppError::validation("price must be positive"));
        assert_eq!(body.code, 2);
        assert_eq!(body.message, "price must be positive");
    }

    #[test]
    fn test_error_body_serialize() {
        let body = ErrorBody::from(&AppError::admin_required());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["code"], 2003);
        assert_eq!(json["message"], "forbidden access");
    }
}
