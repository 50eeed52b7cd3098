//! Review Repository

use shared::models::Review;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reviews
    pub async fn find_all(&self) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT record::id(id) AS id, name, details, rating FROM review")
            .await?
            .take(0)?;
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_find_all_tolerates_missing_name() {
        let tmp = tempfile::tempdir().unwrap();
        let db = DbService::open(tmp.path(), "test", "test").await.unwrap().db;
        db.query("CREATE review:r1 CONTENT { name: 'Ann', details: 'Great soup', rating: 5.0 }")
            .query("CREATE review:r2 CONTENT { details: 'No name given', rating: 3.0 }")
            .await
            .unwrap()
            .check()
            .unwrap();

        let mut reviews = ReviewRepository::new(db).find_all().await.unwrap();
        reviews.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].name.as_deref(), Some("Ann"));
        assert_eq!(reviews[1].name, None);
        assert_eq!(reviews[1].rating, Some(3.0));
    }
}
