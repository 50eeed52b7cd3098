//! User API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /users | GET | admin |
//! | /users | POST | 无 |
//! | /users/admin/{email} | GET | 本人 |
//! | /users/admin/{id} | PATCH | admin |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list).post(handler::register))
        // 同一路径段：GET 按邮箱查询，PATCH 按 id 提升
        .route(
            "/users/admin/{key}",
            get(handler::admin_status).patch(handler::promote),
        )
}
