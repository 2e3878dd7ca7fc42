//! Register Use Case
//!
//! Creates a new user account with role `user` and status `active`.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, password_hash::PasswordHash, user_id::UserId, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Returns the user as re-read from the repository
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let user_name = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let password_hash = PasswordHash::from_plain(input.password)?;

        if self.user_repo.find_by_username(&user_name).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(
            UserId::new().into_inner(),
            user_name.as_str(),
            email.as_str(),
            password_hash.as_str(),
        )?;

        // The unique indexes still catch a concurrent registration here
        self.user_repo.create(&user).await?;

        let persisted = self
            .user_repo
            .find_by_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("registered user vanished".to_string()))?;

        tracing::info!(
            user_id = %persisted.user_id,
            username = %persisted.user_name,
            "User registered"
        );

        Ok(persisted)
    }
}
