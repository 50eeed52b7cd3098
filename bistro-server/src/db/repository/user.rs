//! User Repository

use async_trait::async_trait;
use serde::Serialize;
use shared::models::{Role, UpdateResult, User, UserCreate};
use shared::util::new_id;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::auth::RoleLookup;

const TABLE: &str = "user";

const USER_FIELDS: &str = "record::id(id) AS id, email, name, photo, role";

/// 存储形态 (不含 id)
#[derive(Debug, Serialize)]
struct UserRecord {
    email: String,
    name: Option<String>,
    photo: Option<String>,
    role: Role,
}

/// 注册结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// 新建用户，携带新 id
    Created(String),
    /// 邮箱已存在，未做任何写入
    AlreadyExists,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query(format!("SELECT {USER_FIELDS} FROM user ORDER BY email"))
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {USER_FIELDS} FROM user WHERE email = $email LIMIT 1"
            ))
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Register a user (idempotent on email)
    ///
    /// 新用户角色固定为 guest；并发注册由 email 唯一索引兜底
    pub async fn register(&self, data: UserCreate) -> RepoResult<Registration> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Ok(Registration::AlreadyExists);
        }

        let id = new_id();
        let record = UserRecord {
            email: data.email,
            name: data.name,
            photo: data.photo,
            role: Role::Guest,
        };
        match self.base.insert(TABLE, &id, record).await {
            Ok(()) => Ok(Registration::Created(id)),
            Err(RepoError::Duplicate(_)) => Ok(Registration::AlreadyExists),
            Err(e) => Err(e),
        }
    }

    /// Set role to admin on the user with `id`
    ///
    /// 不存在的 id 返回 matched = 0；已是 admin 时 modified = 0
    pub async fn promote(&self, id: &str) -> RepoResult<UpdateResult> {
        let mut res = self
            .base
            .db()
            .query("SELECT VALUE role FROM user WHERE record::id(id) = $id")
            .query("UPDATE user SET role = 'admin' WHERE record::id(id) = $id RETURN NONE")
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        let before: Vec<Option<String>> = res.take(0)?;

        let matched = before.len() as u64;
        let modified = before
            .iter()
            .filter(|r| r.as_deref().map(Role::parse) != Some(Role::Admin))
            .count() as u64;

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
        })
    }

    /// Make sure `email` exists with the admin role
    pub async fn ensure_admin(&self, email: &str) -> RepoResult<()> {
        match self.find_by_email(email).await? {
            Some(user) if user.is_admin() => Ok(()),
            Some(user) => self.promote(&user.id).await.map(|_| ()),
            None => {
                let record = UserRecord {
                    email: email.to_string(),
                    name: None,
                    photo: None,
                    role: Role::Admin,
                };
                self.base.insert(TABLE, &new_id(), record).await
            }
        }
    }

    /// Total number of users
    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(TABLE).await
    }
}

#[async_trait]
impl RoleLookup for UserRepository {
    async fn find_role(&self, email: &str) -> RepoResult<Option<Role>> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE role FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let roles: Vec<Option<String>> = result.take(0)?;
        Ok(roles
            .into_iter()
            .next()
            .map(|role| role.as_deref().map(Role::parse).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> (tempfile::TempDir, UserRepository) {
        let tmp = tempfile::tempdir().unwrap();
        let db = DbService::open(tmp.path(), "test", "test").await.unwrap().db;
        (tmp, UserRepository::new(db))
    }

    fn ann() -> UserCreate {
        UserCreate {
            email: "ann@example.com".to_string(),
            name: Some("Ann".to_string()),
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let (_tmp, repo) = repo().await;

        assert!(matches!(
            repo.register(ann()).await.unwrap(),
            Registration::Created(_)
        ));
        assert_eq!(
            repo.register(ann()).await.unwrap(),
            Registration::AlreadyExists
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_new_user_is_guest() {
        let (_tmp, repo) = repo().await;
        repo.register(ann()).await.unwrap();

        let user = repo.find_by_email("ann@example.com").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Guest);
        assert_eq!(
            repo.find_role("ann@example.com").await.unwrap(),
            Some(Role::Guest)
        );
        assert_eq!(repo.find_role("nobody@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_promote() {
        let (_tmp, repo) = repo().await;
        let Registration::Created(id) = repo.register(ann()).await.unwrap() else {
            panic!("expected a new user");
        };

        let first = repo.promote(&id).await.unwrap();
        assert_eq!((first.matched_count, first.modified_count), (1, 1));

        let again = repo.promote(&id).await.unwrap();
        assert_eq!((again.matched_count, again.modified_count), (1, 0));

        let missing = repo.promote("does-not-exist").await.unwrap();
        assert_eq!(missing.matched_count, 0);
        assert_eq!(repo.count().await.unwrap(), 1);

        assert_eq!(
            repo.find_role("ann@example.com").await.unwrap(),
            Some(Role::Admin)
        );
    }

    #[tokio::test]
    async fn test_ensure_admin() {
        let (_tmp, repo) = repo().await;
        repo.ensure_admin("boss@example.com").await.unwrap();
        repo.ensure_admin("boss@example.com").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(
            repo.find_role("boss@example.com").await.unwrap(),
            Some(Role::Admin)
        );

        repo.register(ann()).await.unwrap();
        repo.ensure_admin("ann@example.com").await.unwrap();
        assert_eq!(
            repo.find_role("ann@example.com").await.unwrap(),
            Some(Role::Admin)
        );
    }
}
