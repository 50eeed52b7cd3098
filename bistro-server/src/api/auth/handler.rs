//! Token Handlers

use axum::{Json, extract::State};
use shared::client::{TokenRequest, TokenResponse};
use shared::{AppError, AppResult};

use crate::core::ServerState;

/// POST /jwt - 签发令牌
///
/// 客户端在身份提供方登录后调用，令牌只携带邮箱
pub async fn issue_token(
    State(state): State<ServerState>,
    Json(req): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(AppError::validation("email is required"));
    }

    let token = state
        .get_jwt_service()
        .generate_token(email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::debug!(email = %email, "Token issued");
    Ok(Json(TokenResponse { token }))
}
