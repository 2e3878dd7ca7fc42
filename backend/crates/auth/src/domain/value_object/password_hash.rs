//! Password Hash Value Object
//!
//! Stored digest of a user's password. Never holds the clear text.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword};

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Wrap a digest read from storage
    pub fn new(digest: impl Into<String>) -> AppResult<Self> {
        let digest = digest.into();
        if digest.is_empty() {
            return Err(
                AppError::validation("Password hash cannot be empty").with_field("password")
            );
        }
        Ok(Self(HashedPassword::from_hex(digest)))
    }

    /// Hash a clear text password supplied by a client
    pub fn from_plain(plain: impl Into<String>) -> AppResult<Self> {
        let password = ClearTextPassword::new(plain.into())
            .map_err(|e| AppError::validation(e.to_string()).with_field("password"))?;
        Ok(Self(password.hash()))
    }

    pub fn verify(&self, plain: &str) -> bool {
        match ClearTextPassword::new(plain.to_string()) {
            Ok(password) => self.0.verify(&password),
            Err(_) => false,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([HASH])")
    }
}
