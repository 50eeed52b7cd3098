//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DeleteResult, InsertResult, MenuItem, MenuItemCreate};
use shared::{AppError, AppResult};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::repository::MenuRepository;
use crate::utils::money;

/// GET /menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = MenuRepository::new(state.get_db()).find_all().await?;
    Ok(Json(items))
}

/// POST /menu - 新增菜品 (admin)
pub async fn create(
    State(state): State<ServerState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<InsertResult>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::validation("price must be a non-negative number"));
    }
    if payload.price > money::MAX_PRICE {
        return Err(AppError::validation(format!(
            "price exceeds maximum allowed ({})",
            money::MAX_PRICE
        )));
    }

    let result = MenuRepository::new(state.get_db()).create(payload).await?;
    tracing::info!(menu_id = %result.inserted_id, operator = %admin.email, "Menu item created");
    Ok(Json(result))
}

/// DELETE /menu/{id} - 删除菜品 (admin)
pub async fn delete(
    State(state): State<ServerState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let deleted = MenuRepository::new(state.get_db()).delete(&id).await?;
    tracing::info!(menu_id = %id, operator = %admin.email, deleted, "Menu item deleted");
    Ok(Json(DeleteResult::deleted(deleted)))
}
