//! User Command Use Case
//!
//! Administrative mutations. Every successful write is followed by a re-read
//! so callers see the persisted row.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, password_hash::PasswordHash, user_id::UserId, user_name::UserName,
    user_role::UserRole, user_status::UserStatus,
};
use crate::error::{AuthError, AuthResult};

/// Admin-side user creation
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

/// Partial profile update; `None` leaves the field alone
#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct UserCommandUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserCommandUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn create(&self, input: CreateUserInput) -> AuthResult<User> {
        let user_name = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let password_hash = PasswordHash::from_plain(input.password)?;

        self.ensure_username_free(&user_name, None).await?;
        self.ensure_email_free(&email, None).await?;

        let mut user = User::new(
            UserId::new().into_inner(),
            user_name.as_str(),
            email.as_str(),
            password_hash.as_str(),
        )?;
        if let Some(role) = input.role {
            user.update_role(role);
        }
        if let Some(status) = input.status {
            user.update_status(status);
        }

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.user_role,
            "User created by admin"
        );

        self.reload(&user.user_id).await
    }

    /// Apply any subset of username / email / password in one write
    pub async fn update(&self, id: &str, input: UpdateUserInput) -> AuthResult<User> {
        let mut user = self.load(id).await?;

        if let Some(username) = input.username {
            let user_name = UserName::new(&username)?;
            self.ensure_username_free(&user_name, Some(&user.user_id)).await?;
            user.update_username(user_name.as_str())?;
        }
        if let Some(email) = input.email {
            let email = Email::new(&email)?;
            self.ensure_email_free(&email, Some(&user.user_id)).await?;
            user.update_email(email.as_str())?;
        }
        if let Some(password) = input.password {
            let hash = PasswordHash::from_plain(password)?;
            user.update_password(hash.as_str())?;
        }

        self.save(user).await
    }

    pub async fn update_username(&self, id: &str, username: &str) -> AuthResult<User> {
        self.update(
            id,
            UpdateUserInput {
                username: Some(username.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_email(&self, id: &str, email: &str) -> AuthResult<User> {
        self.update(
            id,
            UpdateUserInput {
                email: Some(email.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_password(&self, id: &str, password: &str) -> AuthResult<User> {
        self.update(
            id,
            UpdateUserInput {
                password: Some(password.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_role(&self, id: &str, role: UserRole) -> AuthResult<User> {
        let mut user = self.load(id).await?;
        user.update_role(role);
        tracing::info!(user_id = %user.user_id, role = %role, "User role changed");
        self.save(user).await
    }

    pub async fn update_status(&self, id: &str, status: UserStatus) -> AuthResult<User> {
        let mut user = self.load(id).await?;
        user.update_status(status);
        tracing::info!(user_id = %user.user_id, status = %status, "User status changed");
        self.save(user).await
    }

    pub async fn delete(&self, id: &str) -> AuthResult<()> {
        let user_id = UserId::parse(id)?;
        self.user_repo.delete(&user_id).await?;
        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }

    async fn load(&self, id: &str) -> AuthResult<User> {
        let user_id = UserId::parse(id)?;
        self.user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn save(&self, user: User) -> AuthResult<User> {
        self.user_repo.update(&user).await?;
        self.reload(&user.user_id).await
    }

    async fn reload(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn ensure_username_free(
        &self,
        user_name: &UserName,
        owner: Option<&UserId>,
    ) -> AuthResult<()> {
        match self.user_repo.find_by_username(user_name).await? {
            Some(existing) if Some(&existing.user_id) != owner => Err(AuthError::UsernameTaken),
            _ => Ok(()),
        }
    }

    async fn ensure_email_free(&self, email: &Email, owner: Option<&UserId>) -> AuthResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(&existing.user_id) != owner => Err(AuthError::EmailTaken),
            _ => Ok(()),
        }
    }
}
