//! Statistics API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin-stats", get(handler::admin_stats))
        .route("/order-stats", get(handler::order_stats))
}
