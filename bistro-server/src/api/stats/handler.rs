//! Statistics API Handlers

use axum::{Json, extract::State};
use shared::AppResult;
use shared::models::{AdminStats, CategoryStat};

use crate::auth::{AdminUser, CurrentUser};
use crate::core::ServerState;
use crate::stats;

/// GET /admin-stats - 管理后台概要 (admin)
pub async fn admin_stats(
    State(state): State<ServerState>,
    _admin: AdminUser,
) -> AppResult<Json<AdminStats>> {
    let summary = stats::admin_summary(&state.db).await?;
    Ok(Json(summary))
}

/// GET /order-stats - 按分类统计已售菜品
pub async fn order_stats(
    State(state): State<ServerState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<CategoryStat>>> {
    let breakdown = stats::category_breakdown(&state.db).await?;
    Ok(Json(breakdown))
}
