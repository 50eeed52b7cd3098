//! Database Module
//!
//! Handles the embedded SurrealDB (RocksDB) connection and schema

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::{Config, ServerError};

/// 表和索引定义，可重复执行
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
DEFINE INDEX IF NOT EXISTS user_email ON TABLE user COLUMNS email UNIQUE;
DEFINE TABLE IF NOT EXISTS menu SCHEMALESS;
DEFINE TABLE IF NOT EXISTS review SCHEMALESS;
DEFINE TABLE IF NOT EXISTS cart SCHEMALESS;
DEFINE INDEX IF NOT EXISTS cart_email ON TABLE cart COLUMNS email;
DEFINE TABLE IF NOT EXISTS payment SCHEMALESS;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database configured by `DATABASE_PATH` / `DB_NAMESPACE` / `DB_NAME`
    pub async fn new(config: &Config) -> Result<Self, ServerError> {
        if let Some(parent) = config.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let service = Self::open(
            &config.database_path,
            &config.db_namespace,
            &config.db_name,
        )
        .await?;

        tracing::info!(
            path = %config.database_path.display(),
            ns = %config.db_namespace,
            db = %config.db_name,
            "Database connection established (SurrealDB RocksDB)"
        );
        Ok(service)
    }

    /// Open a RocksDB-backed database at `path` and apply the schema
    pub async fn open(path: &Path, namespace: &str, database: &str) -> Result<Self, ServerError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select ns/db: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|r| r.check())
            .map_err(|e| ServerError::Database(format!("Failed to apply schema: {e}")))?;

        Ok(Self { db })
    }
}
