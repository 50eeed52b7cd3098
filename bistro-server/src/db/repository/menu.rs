//! Menu Repository

use shared::models::{InsertResult, MenuItem, MenuItemCreate};
use shared::util::new_id;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, recipe, image, category, price \
                 FROM menu ORDER BY category, name",
            )
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Create a menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<InsertResult> {
        let id = new_id();
        self.base.insert(TABLE, &id, data).await?;
        Ok(InsertResult::new(id))
    }

    /// Hard delete a menu item, returns deleted count
    pub async fn delete(&self, id: &str) -> RepoResult<u64> {
        self.base.delete_one(TABLE, id).await
    }

    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(TABLE).await
    }
}
