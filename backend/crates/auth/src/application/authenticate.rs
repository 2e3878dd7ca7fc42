//! Authenticate Use Case
//!
//! Checks email + password. Status is checked before the password, so an
//! inactive or locked account is refused even with the right password.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<User> {
        let email = Email::new(&input.email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.can_login() {
            tracing::warn!(
                user_id = %user.user_id,
                status = %user.user_status,
                "Login refused for non-active account"
            );
            return Err(AuthError::AccountInactive);
        }

        if !user.password_hash.verify(&input.password) {
            tracing::warn!(user_id = %user.user_id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User authenticated");

        Ok(user)
    }
}
