//! Bistro Boss Server - 餐厅点餐 API
//!
//! # 架构概述
//!
//! - **认证** (`auth`): JWT 令牌签发/验证，admin 角色和本人访问检查
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **支付** (`payments`): Stripe 授权和支付记录
//! - **统计** (`stats`): 管理后台概要和分类销量
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # 配置、状态、错误、中间件
//! ├── auth/          # JWT 认证、访问控制
//! ├── db/            # 数据库层
//! ├── payments/      # 支付网关和结账流程
//! ├── stats/         # 统计聚合
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、金额
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod payments;
pub mod stats;
pub mod utils;

// Re-export 公共类型
pub use auth::{AdminUser, CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 .env 并初始化日志
///
/// 日志级别和目录在配置加载前读取，保证配置错误也能被记录
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
