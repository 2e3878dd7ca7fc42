//! Admin user-management handlers
//!
//! Mounted behind `require_bearer` + `require_admin`.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::extract::ValidJson;

use crate::application::{CreateUserInput, UpdateUserInput, UserCommandUseCase, UserQueryUseCase};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_role::UserRole, user_status::UserStatus};
use crate::error::AuthResult;
use crate::presentation::dto::{
    CreateUserRequest, UpdateRoleRequest, UpdateStatusRequest, UpdateUserRequest, UserListQuery,
    UserResponse,
};
use crate::presentation::handlers::AuthAppState;

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<UserListQuery>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let filter = query.into_filter()?;
    let users = UserQueryUseCase::new(state.repo.clone()).list(&filter).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = UserQueryUseCase::new(state.repo.clone()).get_by_id(&id).await?;
    Ok(Json(user.into()))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<CreateUserRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let role = req.role.as_deref().map(str::parse::<UserRole>).transpose()?;
    let status = req
        .status
        .as_deref()
        .map(str::parse::<UserStatus>)
        .transpose()?;

    let user = UserCommandUseCase::new(state.repo.clone())
        .create(CreateUserInput {
            username: req.username,
            email: req.email,
            password: req.password,
            role,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = UserCommandUseCase::new(state.repo.clone())
        .update(
            &id,
            UpdateUserInput {
                username: req.username,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(user.into()))
}

/// PUT /users/{id}/role
pub async fn update_role<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateRoleRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let role: UserRole = req.role.parse()?;
    let user = UserCommandUseCase::new(state.repo.clone())
        .update_role(&id, role)
        .await?;

    Ok(Json(user.into()))
}

/// PUT /users/{id}/status
pub async fn update_status<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateStatusRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let status: UserStatus = req.status.parse()?;
    let user = UserCommandUseCase::new(state.repo.clone())
        .update_status(&id, status)
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Send + Sync + 'static,
{
    UserCommandUseCase::new(state.repo.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
