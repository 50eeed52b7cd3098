//! Review API 模块

use axum::{Json, Router, extract::State, routing::get};
use shared::AppResult;
use shared::models::Review;

use crate::core::ServerState;
use crate::db::repository::ReviewRepository;

pub fn router() -> Router<ServerState> {
    Router::new().route("/reviews", get(list))
}

/// GET /reviews - 获取全部评价
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepository::new(state.get_db()).find_all().await?;
    Ok(Json(reviews))
}
