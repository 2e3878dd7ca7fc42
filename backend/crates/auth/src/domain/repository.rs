//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_role::UserRole,
    user_status::UserStatus,
};
use crate::error::AuthResult;

/// Criteria for listing users
///
/// `username` and `email` match as substrings (case-sensitive); `role` and
/// `status` match exactly. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.role.is_none() && self.status.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.username
            .as_deref()
            .is_none_or(|s| user.user_name.as_str().contains(s))
            && self
                .email
                .as_deref()
                .is_none_or(|s| user.email.as_str().contains(s))
            && self.role.is_none_or(|r| user.user_role == r)
            && self.status.is_none_or(|s| user.user_status == s)
    }
}

/// User repository trait
///
/// Unique username and email are enforced here: `create` and `update`
/// return [`crate::error::AuthError::Conflict`] (or a more specific taken
/// variant) on collision.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn find_by_username(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Users matching `filter`, oldest first
    async fn find_all(&self, filter: &UserFilter) -> AuthResult<Vec<User>>;

    /// Overwrite every mutable column; `UserNotFound` if the row is gone
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Hard delete; `UserNotFound` if the row is gone
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;
}
