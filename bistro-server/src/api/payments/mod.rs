//! Payment API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /create-payment-intent | POST | 登录 |
//! | /payments | POST | 登录 + 本人 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/create-payment-intent", post(handler::create_intent))
        .route("/payments", post(handler::record))
}
