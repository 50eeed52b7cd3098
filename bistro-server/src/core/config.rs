use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::ServerError;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/bistro.db | RocksDB 数据目录 |
/// | DB_NAMESPACE | bistro | SurrealDB namespace |
/// | DB_NAME | bistroBoss | SurrealDB database |
/// | ACCESS_TOKEN_SECRET | - | JWT 签名密钥 (生产环境必填) |
/// | PAYMENT_SECRET_KEY | - | Stripe 密钥 |
/// | STRIPE_API_BASE | https://api.stripe.com | Stripe API 地址 |
/// | ADMIN_EMAIL | - | 启动时提升为管理员的账号 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// 日志相关的 LOG_LEVEL / LOG_DIR 在配置加载前由 [`setup_environment`](crate::setup_environment) 读取
///
/// # 示例
///
/// ```ignore
/// PORT=8080 ACCESS_TOKEN_SECRET=... cargo run -p bistro-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// RocksDB 数据目录
    pub database_path: PathBuf,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_name: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// Stripe 密钥
    pub payment_secret_key: String,
    /// Stripe API 地址
    pub stripe_api_base: String,
    /// 启动时提升为管理员的账号
    pub admin_email: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；JWT 密钥缺失 (release 构建) 或过短时返回错误
    pub fn from_env() -> Result<Self, ServerError> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;
        let mut config = Self::with_jwt(jwt);

        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.http_port = port;
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Ok(ns) = std::env::var("DB_NAMESPACE") {
            config.db_namespace = ns;
        }
        if let Ok(name) = std::env::var("DB_NAME") {
            config.db_name = name;
        }
        config.payment_secret_key = std::env::var("PAYMENT_SECRET_KEY").unwrap_or_default();
        if let Ok(base) = std::env::var("STRIPE_API_BASE") {
            config.stripe_api_base = base;
        }
        config.admin_email = std::env::var("ADMIN_EMAIL")
            .ok()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        if let Ok(env) = std::env::var("ENVIRONMENT") {
            config.environment = env;
        }

        if config.payment_secret_key.is_empty() {
            if config.is_production() {
                return Err(ServerError::Config(
                    "PAYMENT_SECRET_KEY must be set in production".to_string(),
                ));
            }
            tracing::warn!("PAYMENT_SECRET_KEY not set, payment authorization will fail");
        }

        Ok(config)
    }

    /// 默认配置 + 指定的 JWT 配置
    ///
    /// 不读取环境变量，常用于测试场景
    pub fn with_jwt(jwt: JwtConfig) -> Self {
        Self {
            http_port: 5000,
            database_path: PathBuf::from("./data/bistro.db"),
            db_namespace: "bistro".into(),
            db_name: "bistroBoss".into(),
            jwt,
            payment_secret_key: String::new(),
            stripe_api_base: "https://api.stripe.com".into(),
            admin_email: None,
            environment: "development".into(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
