//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{CartItem, CartItemCreate, DeleteResult, InsertResult};
use shared::{AppError, AppResult};

use crate::auth::{CurrentUser, ensure_self};
use crate::core::ServerState;
use crate::db::repository::CartRepository;

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// GET /carts?email= - 本人的购物车
///
/// 没有 email 参数时返回空列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<Vec<CartItem>>> {
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        return Ok(Json(Vec::new()));
    };
    ensure_self(&user, &email)?;

    let items = CartRepository::new(state.get_db())
        .list_for_user(&email)
        .await?;
    Ok(Json(items))
}

/// POST /carts - 加入购物车
pub async fn add(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<InsertResult>> {
    if payload.email.trim().is_empty() || payload.menu_item_id.trim().is_empty() {
        return Err(AppError::validation("email and menuItemId are required"));
    }
    let result = CartRepository::new(state.get_db()).add(payload).await?;
    Ok(Json(result))
}

/// DELETE /carts/{id} - 删除购物车行
pub async fn remove(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let deleted = CartRepository::new(state.get_db()).remove(&id).await?;
    Ok(Json(DeleteResult::deleted(deleted)))
}
