//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod user;

// Re-exports
pub use cart::CartRepository;
pub use menu::MenuRepository;
pub use payment::PaymentRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

use serde::Deserialize;
use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // UNIQUE 索引冲突
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 记录键为 uuid simple 字符串，对外只暴露纯 key：
//   - 创建: CREATE type::thing($tb, $id) CONTENT $data
//   - 读取: SELECT record::id(id) AS id, ... 显式投影，模型里 id 始终是 String
//   - 删除: 先 SELECT VALUE record::id(id) 统计命中，再 DELETE ... RETURN NONE

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// 表中记录数 (空表为 0)
    pub async fn count(&self, table: &'static str) -> RepoResult<u64> {
        let rows: Vec<CountRow> = self
            .db
            .query("SELECT count() AS count FROM type::table($tb) GROUP ALL")
            .bind(("tb", table))
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }

    /// 以指定 key 插入一条记录
    pub async fn insert<T>(&self, table: &'static str, id: &str, data: T) -> RepoResult<()>
    where
        T: serde::Serialize + 'static,
    {
        self.db
            .query("CREATE type::thing($tb, $id) CONTENT $data RETURN NONE")
            .bind(("tb", table))
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?
            .check()?;
        Ok(())
    }

    /// 按 key 删除一条记录，返回删除条数 (0 或 1)
    pub async fn delete_one(&self, table: &'static str, id: &str) -> RepoResult<u64> {
        self.delete_many(table, vec![id.to_string()]).await
    }

    /// 删除 key 在列表中的所有记录，返回删除条数
    pub async fn delete_many(&self, table: &'static str, ids: Vec<String>) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut res = self
            .db
            .query("SELECT VALUE record::id(id) FROM type::table($tb) WHERE record::id(id) IN $ids")
            .query("DELETE type::table($tb) WHERE record::id(id) IN $ids RETURN NONE")
            .bind(("tb", table))
            .bind(("ids", ids))
            .await?
            .check()?;
        let matched: Vec<String> = res.take(0)?;
        Ok(matched.len() as u64)
    }
}
