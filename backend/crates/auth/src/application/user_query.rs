//! User Query Use Case
//!
//! Read-only lookups for the profile and admin endpoints.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilter, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

pub struct UserQueryUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserQueryUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn get_by_id(&self, id: &str) -> AuthResult<User> {
        let user_id = UserId::parse(id)?;
        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    pub async fn get_by_email(&self, email: &str) -> AuthResult<User> {
        let email = Email::new(email)?;
        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    pub async fn get_by_username(&self, username: &str) -> AuthResult<User> {
        let user_name = UserName::new(username)?;
        self.user_repo
            .find_by_username(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Empty filter lists every user
    pub async fn list(&self, filter: &UserFilter) -> AuthResult<Vec<User>> {
        self.user_repo.find_all(filter).await
    }
}
