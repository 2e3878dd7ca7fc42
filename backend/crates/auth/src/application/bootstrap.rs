//! Administrator bootstrap
//!
//! Admin routes need an admin to exist. At startup the binary may pass
//! credentials here; an existing account with that email is promoted,
//! otherwise a new admin is created.

use std::sync::Arc;

use crate::application::user_command::{CreateUserInput, UserCommandUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole, user_status::UserStatus};
use crate::error::AuthResult;

/// Administrator credentials from configuration
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Idempotent; the password of an existing account is left unchanged
pub async fn ensure_admin<U>(user_repo: Arc<U>, seed: AdminSeed) -> AuthResult<User>
where
    U: UserRepository,
{
    let commands = UserCommandUseCase::new(user_repo.clone());
    let email = Email::new(&seed.email)?;

    if let Some(existing) = user_repo.find_by_email(&email).await? {
        if existing.user_role == UserRole::Admin {
            tracing::debug!(user_id = %existing.user_id, "Administrator already present");
            return Ok(existing);
        }
        tracing::info!(user_id = %existing.user_id, "Promoting configured account to admin");
        return commands
            .update_role(existing.user_id.as_str(), UserRole::Admin)
            .await;
    }

    let admin = commands
        .create(CreateUserInput {
            username: seed.username,
            email: seed.email,
            password: seed.password,
            role: Some(UserRole::Admin),
            status: Some(UserStatus::Active),
        })
        .await?;

    tracing::info!(user_id = %admin.user_id, "Administrator account created");

    Ok(admin)
}
