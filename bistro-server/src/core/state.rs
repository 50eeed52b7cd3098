use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{JwtService, RoleLookup};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::UserRepository;
use crate::payments::{PaymentGateway, StripeGateway};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次，成本极低。
/// 除数据库外不存在跨请求的可变状态。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | payments | Arc<dyn PaymentGateway> | 支付网关 (Stripe) |
/// | roles | Arc<dyn RoleLookup> | 角色查询 (每次请求读库，无缓存) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
    /// 支付网关
    pub payments: Arc<dyn PaymentGateway>,
    /// 角色查询
    pub roles: Arc<dyn RoleLookup>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试中用它注入替身网关
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        payments: Arc<dyn PaymentGateway>,
        roles: Arc<dyn RoleLookup>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            payments,
            roles,
        }
    }

    /// 使用指定数据库和支付网关构造，其余服务按配置创建
    pub fn with_db(config: Config, db: Surreal<Db>, payments: Arc<dyn PaymentGateway>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let roles: Arc<dyn RoleLookup> = Arc::new(UserRepository::new(db.clone()));
        Self::new(config, db, jwt_service, payments, roles)
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (RocksDB, schema)
    /// 2. 各服务 (JWT, Stripe 网关, 角色查询)
    /// 3. ADMIN_EMAIL 指定的管理员账号
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::new(config).await?;
        let db = db_service.db;

        let payments: Arc<dyn PaymentGateway> = Arc::new(StripeGateway::new(
            config.payment_secret_key.clone(),
            config.stripe_api_base.clone(),
        ));

        let state = Self::with_db(config.clone(), db, payments);

        if let Some(email) = &config.admin_email {
            UserRepository::new(state.get_db()).ensure_admin(email).await?;
            tracing::info!(email = %email, "Bootstrap admin account ensured");
        }

        Ok(state)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取支付网关
    pub fn payment_gateway(&self) -> Arc<dyn PaymentGateway> {
        self.payments.clone()
    }

    /// 获取角色查询服务
    pub fn role_lookup(&self) -> Arc<dyn RoleLookup> {
        self.roles.clone()
    }
}
