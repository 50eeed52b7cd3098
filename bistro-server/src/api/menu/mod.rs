//! Menu API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::list).post(handler::create))
        .route("/menu/{id}", delete(handler::delete))
}
