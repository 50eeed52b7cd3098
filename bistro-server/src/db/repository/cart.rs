//! Cart Repository
//!
//! 购物车行按 email 归属，同一菜品重复加入会产生多行

use shared::models::{CartItem, CartItemCreate, InsertResult};
use shared::util::new_id;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};

const TABLE: &str = "cart";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Add a line to the cart (no merging)
    pub async fn add(&self, item: CartItemCreate) -> RepoResult<InsertResult> {
        let id = new_id();
        self.base.insert(TABLE, &id, item).await?;
        Ok(InsertResult::new(id))
    }

    /// All lines owned by `email`
    pub async fn list_for_user(&self, email: &str) -> RepoResult<Vec<CartItem>> {
        let items: Vec<CartItem> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, email, menuItemId, name, image, price \
                 FROM cart WHERE email = $email",
            )
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Delete one line; unknown ids delete nothing
    pub async fn remove(&self, id: &str) -> RepoResult<u64> {
        self.base.delete_one(TABLE, id).await
    }

    /// Delete every line whose id is in `ids`
    pub async fn remove_many(&self, ids: &[String]) -> RepoResult<u64> {
        self.base.delete_many(TABLE, ids.to_vec()).await
    }
}
