//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::repository::UserFilter;
use crate::domain::value_object::{user_role::UserRole, user_status::UserStatus};
use crate::error::AuthResult;

// ============================================================================
// Register / Login
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful register or login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

// ============================================================================
// User
// ============================================================================

/// Public view of a user; the password hash never leaves the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.into_inner(),
            username: user.user_name.into_inner(),
            email: user.email.to_string(),
            role: user.user_role.to_string(),
            status: user.user_status.to_string(),
        }
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// `GET /users` query string; blank parameters are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl UserListQuery {
    /// Unknown role/status strings are a validation error
    pub fn into_filter(self) -> AuthResult<UserFilter> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Ok(UserFilter {
            username: non_blank(self.username),
            email: non_blank(self.email),
            role: non_blank(self.role)
                .map(|r| r.parse::<UserRole>())
                .transpose()?,
            status: non_blank(self.status)
                .map(|s| s.parse::<UserStatus>())
                .transpose()?,
        })
    }
}
