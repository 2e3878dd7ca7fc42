//! User Entity
//!
//! The four identity fields are value objects, so a `User` can never hold an
//! empty id, username, email or password hash. Uniqueness of username and
//! email is the repository's job.

use chrono::{DateTime, Utc};

use kernel::error::app_error::AppResult;

use crate::domain::value_object::{
    email::Email, password_hash::PasswordHash, user_id::UserId, user_name::UserName,
    user_role::UserRole, user_status::UserStatus,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque identifier
    pub user_id: UserId,
    /// Unique handle
    pub user_name: UserName,
    /// Unique contact address, used for login
    pub email: Email,
    /// SHA-256 hex digest of the password
    pub password_hash: PasswordHash,
    pub user_role: UserRole,
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with role `user` and status `active`
    ///
    /// `password_hash` must already be a digest.
    pub fn new(
        id: impl Into<String>,
        username: impl AsRef<str>,
        email: impl AsRef<str>,
        password_hash: impl Into<String>,
    ) -> AppResult<Self> {
        let now = Utc::now();

        Ok(Self {
            user_id: UserId::parse(id)?,
            user_name: UserName::new(username)?,
            email: Email::new(email)?,
            password_hash: PasswordHash::new(password_hash)?,
            user_role: UserRole::default(),
            user_status: UserStatus::default(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_username(&mut self, username: impl AsRef<str>) -> AppResult<()> {
        self.user_name = UserName::new(username)?;
        self.touch();
        Ok(())
    }

    pub fn update_email(&mut self, email: impl AsRef<str>) -> AppResult<()> {
        self.email = Email::new(email)?;
        self.touch();
        Ok(())
    }

    /// Replace the stored digest; callers hash the clear text first
    pub fn update_password(&mut self, password_hash: impl Into<String>) -> AppResult<()> {
        self.password_hash = PasswordHash::new(password_hash)?;
        self.touch();
        Ok(())
    }

    pub fn update_role(&mut self, role: UserRole) {
        self.user_role = role;
        self.touch();
    }

    pub fn update_status(&mut self, status: UserStatus) {
        self.user_status = status;
        self.touch();
    }

    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.user_status.can_login()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
