//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use shared::AppResult;
use shared::client::{AdminStatus, AlreadyRegistered};
use shared::models::{InsertResult, Role, UpdateResult, User, UserCreate};

use crate::auth::{AdminUser, CurrentUser, ensure_self};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::db::repository::user::Registration;
use crate::security_log;

/// GET /users - 所有用户 (admin)
pub async fn list(
    State(state): State<ServerState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepository::new(state.get_db()).find_all().await?;
    Ok(Json(users))
}

/// POST /users - 注册用户 (同一邮箱只写入一次)
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Response> {
    let repo = UserRepository::new(state.get_db());
    match repo.register(payload).await? {
        Registration::Created(id) => {
            tracing::info!(user_id = %id, "User registered");
            Ok(Json(InsertResult::new(id)).into_response())
        }
        Registration::AlreadyExists => Ok(Json(AlreadyRegistered::default()).into_response()),
    }
}

/// GET /users/admin/{email} - 查询本人是否为 admin
pub async fn admin_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatus>> {
    ensure_self(&user, &email)?;

    let role = state.role_lookup().find_role(&email).await?;
    Ok(Json(AdminStatus {
        admin: role == Some(Role::Admin),
    }))
}

/// PATCH /users/admin/{id} - 提升为 admin (admin)
pub async fn promote(
    State(state): State<ServerState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let result = UserRepository::new(state.get_db()).promote(&id).await?;
    security_log!(
        "INFO",
        "user_promoted",
        user_id = id.clone(),
        operator = admin.email.clone(),
        modified = result.modified_count
    );
    Ok(Json(result))
}
