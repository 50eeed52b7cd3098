//! Cart API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/carts", get(handler::list).post(handler::add))
        .route("/carts/{id}", delete(handler::remove))
}
