//! 访问控制
//!
//! 角色检查和本人访问检查。角色不缓存，每次检查都通过 [`RoleLookup`] 读一次库，
//! 所以角色变更在下一个请求立即生效。

use async_trait::async_trait;
use shared::models::Role;
use shared::{AppError, AppResult};

use crate::auth::CurrentUser;
use crate::db::repository::RepoResult;
use crate::security_log;

/// 按邮箱查询用户角色
///
/// 生产环境由 [`UserRepository`](crate::db::repository::UserRepository) 实现
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// 用户不存在时返回 `Ok(None)`
    async fn find_role(&self, email: &str) -> RepoResult<Option<Role>>;
}

/// `actual` 是否满足 `required`
pub fn role_satisfies(actual: Role, required: Role) -> bool {
    match required {
        Role::Guest => true,
        Role::Admin => actual == Role::Admin,
    }
}

/// 检查已认证身份是否具有指定角色
///
/// 只做一次角色读取；用户记录不存在或角色不满足都返回 403
pub async fn authorize(
    identity: &CurrentUser,
    required: Role,
    lookup: &dyn RoleLookup,
) -> AppResult<()> {
    let role = lookup
        .find_role(&identity.email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    match role {
        Some(actual) if role_satisfies(actual, required) => Ok(()),
        _ => {
            security_log!(
                "WARN",
                "admin_required",
                email = identity.email.clone(),
                required = required.to_string()
            );
            Err(AppError::admin_required())
        }
    }
}

/// 请求中的邮箱必须是令牌主体本人
pub fn ensure_self(identity: &CurrentUser, email: &str) -> AppResult<()> {
    if identity.email == email {
        return Ok(());
    }
    security_log!(
        "WARN",
        "self_access_denied",
        subject = identity.email.clone(),
        requested = email.to_string()
    );
    Err(AppError::not_owner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::db::repository::RepoError;

    #[derive(Default)]
    struct FakeRoles {
        roles: HashMap<String, Role>,
        reads: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl RoleLookup for FakeRoles {
        async fn find_role(&self, email: &str) -> RepoResult<Option<Role>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepoError::Database("offline".into()));
            }
            Ok(self.roles.get(email).copied())
        }
    }

    fn user(email: &str) -> CurrentUser {
        CurrentUser {
            email: email.to_string(),
        }
    }

    fn roles() -> FakeRoles {
        let mut roles = HashMap::new();
        roles.insert("boss@example.com".to_string(), Role::Admin);
        roles.insert("ann@example.com".to_string(), Role::Guest);
        FakeRoles {
            roles,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_admin_passes() {
        let lookup = roles();
        authorize(&user("boss@example.com"), Role::Admin, &lookup)
            .await
            .unwrap();
        assert_eq!(lookup.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_guest_is_forbidden() {
        let lookup = roles();
        let err = authorize(&user("ann@example.com"), Role::Admin, &lookup)
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(lookup.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_user_is_forbidden() {
        let err = authorize(&user("ghost@example.com"), Role::Admin, &roles())
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_internal() {
        let lookup = FakeRoles {
            fail: true,
            ..Default::default()
        };
        let err = authorize(&user("boss@example.com"), Role::Admin, &lookup)
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ensure_self() {
        let ann = user("ann@example.com");
        assert!(ensure_self(&ann, "ann@example.com").is_ok());

        let err = ensure_self(&ann, "bob@example.com").unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn test_role_satisfies() {
        assert!(role_satisfies(Role::Admin, Role::Admin));
        assert!(role_satisfies(Role::Admin, Role::Guest));
        assert!(role_satisfies(Role::Guest, Role::Guest));
        assert!(!role_satisfies(Role::Guest, Role::Admin));
    }
}
